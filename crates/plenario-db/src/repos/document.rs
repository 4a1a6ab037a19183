//! Document repository — protocoling, tramitação transitions, FTS.
//!
//! Protocol numbers are a dense sequence per (kind, year). The number is
//! allocated by the INSERT itself with a `COALESCE(MAX(number),0)+1`
//! subselect, and the UNIQUE constraint on (kind, number, year) backs it up,
//! so two concurrent protocolings cannot take the same number.

use chrono::Utc;

use plenario_core::audit_detail::{ProtocolDetail, StatusChangedDetail};
use plenario_core::entities::Document;
use plenario_core::enums::{AuditAction, DocumentKind, DocumentStatus, EntityType};
use plenario_core::ids::PREFIX_DOCUMENT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::ChamberService;
use crate::updates::document::DocumentUpdate;

const SELECT_COLS: &str =
    "id, kind, number, year, subject, body, author_id, status, created_at, updated_at";

fn row_to_document(row: &libsql::Row) -> Result<Document, DatabaseError> {
    Ok(Document {
        id: row.get(0)?,
        kind: parse_enum(&row.get::<String>(1)?)?,
        number: row.get(2)?,
        year: i32::try_from(row.get::<i64>(3)?)
            .map_err(|_| DatabaseError::Query("year out of range".into()))?,
        subject: row.get(4)?,
        body: get_opt_string(row, 5)?,
        author_id: get_opt_string(row, 6)?,
        status: parse_enum(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl ChamberService {
    /// Next free protocol number for (kind, year). Purely informational;
    /// `protocol_document` allocates atomically and may hand out the same
    /// number to only one caller.
    pub async fn next_protocol_number(
        &self,
        kind: DocumentKind,
        year: i32,
    ) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(MAX(number), 0) + 1 FROM documents WHERE kind = ?1 AND year = ?2",
                libsql::params![kind.as_str(), i64::from(year)],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// Protocol a document, allocating its number in the same INSERT.
    pub async fn protocol_document(
        &self,
        kind: DocumentKind,
        year: i32,
        subject: &str,
        body: Option<&str>,
        author_id: Option<&str>,
    ) -> Result<Document, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DOCUMENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO documents ({SELECT_COLS})
                     VALUES (?1, ?2,
                             (SELECT COALESCE(MAX(number), 0) + 1
                              FROM documents WHERE kind = ?2 AND year = ?3),
                             ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    kind.as_str(),
                    i64::from(year),
                    subject,
                    body,
                    author_id,
                    DocumentStatus::Protocolado.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let document = self.get_document(&id).await?;

        let detail = ProtocolDetail {
            kind: kind.as_str().to_string(),
            number: document.number,
            year,
        };
        self.audit(
            EntityType::Document,
            &id,
            AuditAction::Created,
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(document)
    }

    pub async fn get_document(&self, id: &str) -> Result<Document, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM documents WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_document(&row)
    }

    /// Look a document up by its protocol reference.
    pub async fn get_document_by_protocol(
        &self,
        kind: DocumentKind,
        number: i64,
        year: i32,
    ) -> Result<Document, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM documents
                     WHERE kind = ?1 AND number = ?2 AND year = ?3"
                ),
                libsql::params![kind.as_str(), number, i64::from(year)],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_document(&row)
    }

    /// List documents, newest first. Optional status filter.
    pub async fn list_documents(
        &self,
        status: Option<DocumentStatus>,
        limit: u32,
    ) -> Result<Vec<Document>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM documents WHERE status = ?1
                             ORDER BY created_at DESC LIMIT {limit}"
                        ),
                        [status.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM documents
                             ORDER BY created_at DESC LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    pub async fn update_document(
        &self,
        document_id: &str,
        update: DocumentUpdate,
    ) -> Result<Document, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref subject) = update.subject {
            sets.push(format!("subject = ?{idx}"));
            params.push(subject.clone().into());
            idx += 1;
        }
        if let Some(ref body) = update.body {
            sets.push(format!("body = ?{idx}"));
            params.push(body.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref author_id) = update.author_id {
            sets.push(format!("author_id = ?{idx}"));
            params.push(author_id.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_document(document_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(document_id.into());
        let sql = format!("UPDATE documents SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_document(document_id).await?;

        self.audit(
            EntityType::Document,
            document_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Move a document through tramitação, enforcing the transition table.
    pub async fn transition_document(
        &self,
        document_id: &str,
        new_status: DocumentStatus,
        reason: Option<&str>,
    ) -> Result<Document, DatabaseError> {
        let current = self.get_document(document_id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition document {} from {} to {}",
                document_id, current.status, new_status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE documents SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![new_status.as_str(), now.to_rfc3339(), document_id],
            )
            .await?;

        let updated = Document {
            status: new_status,
            updated_at: now,
            ..current.clone()
        };

        let detail = StatusChangedDetail {
            from: current.status.as_str().to_string(),
            to: new_status.as_str().to_string(),
            reason: reason.map(String::from),
        };

        self.audit(
            EntityType::Document,
            document_id,
            AuditAction::StatusChanged,
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM documents WHERE id = ?1", [document_id])
            .await?;

        self.audit(EntityType::Document, document_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }

    /// FTS5 search over document subjects and bodies.
    pub async fn search_documents(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Document>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT d.id, d.kind, d.number, d.year, d.subject, d.body, \
                 d.author_id, d.status, d.created_at, d.updated_at \
                 FROM documents_fts \
                 JOIN documents d ON d.rowid = documents_fts.rowid \
                 WHERE documents_fts MATCH ?1 \
                 ORDER BY rank LIMIT ?2",
                libsql::params![query, limit],
            )
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }
}
