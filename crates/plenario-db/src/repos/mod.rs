//! Repository modules implementing CRUD operations for all chamber entities.
//!
//! Each module adds methods to `ChamberService` via `impl ChamberService` blocks.

pub mod agenda;
pub mod agent;
pub mod audit;
pub mod board;
pub mod committee;
pub mod councilor;
pub mod document;
pub mod minutes;
pub mod opinion;
pub mod overview;
pub mod session;
pub mod user;
