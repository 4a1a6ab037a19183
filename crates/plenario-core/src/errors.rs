//! Cross-cutting error types for Plenário.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `DraftingError`) are defined
//! in their respective crates. Errors converge into `anyhow` at the CLI.

use thiserror::Error;

/// Errors that can be raised by any Plenário crate.
///
/// Lookup misses and rejected status transitions are database concerns and
/// live in `DatabaseError` (`NoResult` / `InvalidState`).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (CPF checksum, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A seat key does not exist in the seat map it was used against.
    #[error("Unknown seat: {seat}")]
    UnknownSeat { seat: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
