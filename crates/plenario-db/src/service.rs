//! Service layer orchestrating database mutations with the audit trail.
//!
//! `ChamberService` wraps `ChamberDb` (raw database access) and carries the
//! acting user for audit attribution. All repo methods are implemented as
//! `impl ChamberService` blocks under `repos/`.

use crate::ChamberDb;
use crate::error::DatabaseError;

/// Orchestrates database mutations with audit trail attribution.
///
/// Every mutation method executes its SQL and appends an audit entry
/// recording what changed and who did it.
pub struct ChamberService {
    db: ChamberDb,
    actor: Option<String>,
}

impl ChamberService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ChamberDb::open_local(db_path).await?;
        Ok(Self { db, actor: None })
    }

    /// Create a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, DatabaseError> {
        let db = ChamberDb::open_synced(local_replica_path, remote_url, auth_token).await?;
        Ok(Self { db, actor: None })
    }

    /// Create from an existing `ChamberDb` (for testing).
    #[must_use]
    pub const fn from_db(db: ChamberDb) -> Self {
        Self { db, actor: None }
    }

    /// Set the acting user recorded in audit entries.
    #[must_use]
    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor = Some(actor_id.into());
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ChamberDb {
        &self.db
    }

    /// The acting user recorded in audit entries, if any.
    #[must_use]
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Sync the underlying database with remote cloud state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the sync fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await
    }

    /// Returns whether this service is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.db.is_synced_replica()
    }
}
