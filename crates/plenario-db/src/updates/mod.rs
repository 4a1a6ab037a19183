//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. The update struct is
//! serialized as the audit `detail` payload (changed fields only). Nullable
//! columns use `Option<Option<T>>`: the outer `Option` means "change this
//! field", the inner one is the new value (possibly NULL).

pub mod agenda;
pub mod agent;
pub mod committee;
pub mod councilor;
pub mod document;
pub mod minutes;
pub mod opinion;
pub mod session;
