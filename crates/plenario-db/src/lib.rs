//! # plenario-db
//!
//! libSQL database operations for Plenário chamber state.
//!
//! Handles all relational state: agents, councilors, committees and their
//! seats, the directing board, legislative sessions, agendas, minutes,
//! protocoled documents, committee opinions, portal users, and the audit
//! trail. Uses libSQL local files or Turso embedded replicas with cloud sync.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) — provides native FTS5,
//! stable API, and Turso Cloud embedded replica support.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all chamber state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation and hosts
/// the repository methods via [`service::ChamberService`].
pub struct ChamberDb {
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
}

impl ChamberDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let chamber_db = Self {
            db,
            conn,
            synced: false,
        };
        chamber_db.run_migrations().await?;
        Ok(chamber_db)
    }

    /// Open a Turso embedded replica: local file synced against a remote URL.
    ///
    /// Performs an initial `sync()` so the replica starts from current cloud
    /// state, then runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be created, the initial
    /// sync fails, or migrations fail.
    pub async fn open_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            local_replica_path,
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .read_your_writes(true)
        .build()
        .await?;
        db.sync().await?;

        let conn = db.connect()?;
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let chamber_db = Self {
            db,
            conn,
            synced: true,
        };
        chamber_db.run_migrations().await?;
        Ok(chamber_db)
    }

    /// Push local writes to the remote and pull remote changes.
    ///
    /// No-op for local-only databases.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the sync fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        if self.synced {
            self.db.sync().await?;
        }
        Ok(())
    }

    /// Whether this handle is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ses-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Generate an opaque invitation token (32-char hex).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_token(&self) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(16)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> ChamberDb {
        ChamberDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "agents",
            "councilors",
            "committees",
            "committee_seats",
            "boards",
            "board_seats",
            "sessions",
            "documents",
            "agenda_items",
            "minutes",
            "opinions",
            "users",
            "audit_trail",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn fts5_tables_exist() {
        let db = test_db().await;

        for table in &["documents_fts", "sessions_fts"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "FTS5 table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("ses").await.unwrap();
        assert!(id.starts_with("ses-"), "ID should start with 'ses-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in plenario_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn generate_token_is_32_hex_chars() {
        let db = test_db().await;
        let token = db.generate_token().await.unwrap();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn fts5_trigger_populates_on_insert() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO documents (id, kind, number, year, subject, status) \
                 VALUES ('doc-test1', 'mocao', 1, 2025, 'Homenagem aos professores da rede municipal', 'protocolado')",
                (),
            )
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query(
                "SELECT rowid FROM documents_fts WHERE documents_fts MATCH 'professores'",
                (),
            )
            .await
            .unwrap();
        assert!(
            rows.next().await.unwrap().is_some(),
            "FTS trigger should populate on INSERT"
        );
    }

    #[tokio::test]
    async fn committee_seat_unique_constraints() {
        let db = test_db().await;

        db.conn()
            .execute("INSERT INTO committees (id, name, kind) VALUES ('com-t1', 'Finanças', 'permanente')", ())
            .await
            .unwrap();
        db.conn()
            .execute("INSERT INTO councilors (id, name, party) VALUES ('ver-t1', 'Ana', 'PSD')", ())
            .await
            .unwrap();
        db.conn()
            .execute("INSERT INTO councilors (id, name, party) VALUES ('ver-t2', 'Bruno', 'MDB')", ())
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO committee_seats (committee_id, role, councilor_id) VALUES ('com-t1', 'presidente', 'ver-t1')",
                (),
            )
            .await
            .unwrap();

        // Same role twice on one committee
        let dup_role = db
            .conn()
            .execute(
                "INSERT INTO committee_seats (committee_id, role, councilor_id) VALUES ('com-t1', 'presidente', 'ver-t2')",
                (),
            )
            .await;
        assert!(dup_role.is_err(), "Duplicate role should be rejected");

        // Same councilor on two seats of one committee
        let dup_occupant = db
            .conn()
            .execute(
                "INSERT INTO committee_seats (committee_id, role, councilor_id) VALUES ('com-t1', 'relator', 'ver-t1')",
                (),
            )
            .await;
        assert!(dup_occupant.is_err(), "Duplicate occupant should be rejected");
    }

    #[tokio::test]
    async fn session_business_key_unique() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO sessions (id, number, year, kind, scheduled_for, title) \
                 VALUES ('ses-t1', 23, 2025, 'ordinaria', '2025-08-12T19:00:00+00:00', 'Vigésima Terceira Sessão Ordinária de 2025')",
                (),
            )
            .await
            .unwrap();

        let dup = db
            .conn()
            .execute(
                "INSERT INTO sessions (id, number, year, kind, scheduled_for, title) \
                 VALUES ('ses-t2', 23, 2025, 'ordinaria', '2025-08-13T19:00:00+00:00', 'Vigésima Terceira Sessão Ordinária de 2025')",
                (),
            )
            .await;
        assert!(dup.is_err(), "Duplicate (number, kind, year) should be rejected");
    }

    #[tokio::test]
    async fn insert_all_table_types() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO agents (id, name, cpf) VALUES ('agt-t1', 'Servidor Teste', '529.982.247-25')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute("INSERT INTO councilors (id, name, party) VALUES ('ver-t1', 'Ana', 'PSD')", ())
            .await
            .unwrap();

        db.conn()
            .execute("INSERT INTO committees (id, name, kind) VALUES ('com-t1', 'Educação', 'permanente')", ())
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO committee_seats (committee_id, role, councilor_id) VALUES ('com-t1', 'relator', 'ver-t1')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute("INSERT INTO boards (id, legislature) VALUES ('mes-t1', '2025-2026')", ())
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO board_seats (board_id, role, councilor_id) VALUES ('mes-t1', 'presidente', 'ver-t1')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO sessions (id, number, year, kind, scheduled_for, title) \
                 VALUES ('ses-t1', 1, 2025, 'ordinaria', '2025-02-01T19:00:00+00:00', 'Primeira Sessão Ordinária de 2025')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO documents (id, kind, number, year, subject, author_id) \
                 VALUES ('doc-t1', 'mocao', 1, 2025, 'Moção de aplauso', 'ver-t1')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO agenda_items (id, session_id, document_id, position, description) \
                 VALUES ('pau-t1', 'ses-t1', 'doc-t1', 1, 'Leitura da moção')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO minutes (id, session_id, title) \
                 VALUES ('ata-t1', 'ses-t1', 'Ata da Primeira Sessão Ordinária de 2025')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO opinions (id, committee_id, document_id, rapporteur_id) \
                 VALUES ('par-t1', 'com-t1', 'doc-t1', 'ver-t1')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO users (id, email, name) VALUES ('usr-t1', 'sec@camara.gov.br', 'Secretaria')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO audit_trail (id, entity_type, entity_id, action) \
                 VALUES ('aud-t1', 'document', 'doc-t1', 'created')",
                (),
            )
            .await
            .unwrap();
    }
}
