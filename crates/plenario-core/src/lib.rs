//! # plenario-core
//!
//! Core types and domain rules for Plenário, the administrative system of a
//! municipal legislative chamber.
//!
//! This crate provides the foundational pieces shared across all Plenário
//! crates:
//! - Entity structs for all domain objects (councilors, committees, sessions,
//!   documents, etc.)
//! - Status enums with state machine transitions
//! - The seat-assignment model for committees and the directing board
//! - CPF validation
//! - Portuguese ordinal title generation for sessions and minutes
//! - ID prefix constants
//! - Cross-cutting error types
//! - Typed audit detail payloads
//! - CLI response types

pub mod audit_detail;
pub mod cpf;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod seats;
pub mod titles;
