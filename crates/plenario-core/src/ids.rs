//! Entity ID prefixes.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, generated in SQL via
//! `randomblob(4)` (see `ChamberDb::generate_id` in plenario-db).

pub const PREFIX_AGENT: &str = "agt";
pub const PREFIX_COUNCILOR: &str = "ver";
pub const PREFIX_COMMITTEE: &str = "com";
pub const PREFIX_BOARD: &str = "mes";
pub const PREFIX_SESSION: &str = "ses";
pub const PREFIX_AGENDA_ITEM: &str = "pau";
pub const PREFIX_MINUTES: &str = "ata";
pub const PREFIX_DOCUMENT: &str = "doc";
pub const PREFIX_OPINION: &str = "par";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_AUDIT: &str = "aud";

/// All prefixes, for exhaustive ID-generation tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_AGENT,
    PREFIX_COUNCILOR,
    PREFIX_COMMITTEE,
    PREFIX_BOARD,
    PREFIX_SESSION,
    PREFIX_AGENDA_ITEM,
    PREFIX_MINUTES,
    PREFIX_DOCUMENT,
    PREFIX_OPINION,
    PREFIX_USER,
    PREFIX_AUDIT,
];
