//! Minutes (ata) repository — one draft per session, immutable once approved.

use chrono::Utc;

use plenario_core::entities::Minutes;
use plenario_core::enums::{AuditAction, EntityType, MinutesStatus};
use plenario_core::ids::PREFIX_MINUTES;
use plenario_core::titles;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::ChamberService;
use crate::updates::minutes::MinutesUpdate;

const SELECT_COLS: &str = "id, session_id, title, body, status, created_at, updated_at";

fn row_to_minutes(row: &libsql::Row) -> Result<Minutes, DatabaseError> {
    Ok(Minutes {
        id: row.get(0)?,
        session_id: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl ChamberService {
    /// Open the draft ata for a session. The title follows the session's
    /// generated title with the "Ata da" prefix. One ata per session; a
    /// second draft fails on the UNIQUE constraint.
    pub async fn draft_minutes(
        &self,
        session_id: &str,
        body: Option<&str>,
    ) -> Result<Minutes, DatabaseError> {
        let session = self.get_session(session_id).await?;
        let title = titles::minutes_title(session.number, session.kind, session.year)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MINUTES).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO minutes ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    session_id,
                    title.as_str(),
                    body.unwrap_or(""),
                    MinutesStatus::Rascunho.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let minutes = Minutes {
            id: id.clone(),
            session_id: session_id.to_string(),
            title,
            body: body.unwrap_or("").to_string(),
            status: MinutesStatus::Rascunho,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Minutes, &id, AuditAction::Created, None)
            .await?;

        Ok(minutes)
    }

    pub async fn get_minutes(&self, id: &str) -> Result<Minutes, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM minutes WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_minutes(&row)
    }

    pub async fn get_minutes_for_session(&self, session_id: &str) -> Result<Minutes, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM minutes WHERE session_id = ?1"),
                [session_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_minutes(&row)
    }

    pub async fn list_minutes(&self, limit: u32) -> Result<Vec<Minutes>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM minutes ORDER BY created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut all = Vec::new();
        while let Some(row) = rows.next().await? {
            all.push(row_to_minutes(&row)?);
        }
        Ok(all)
    }

    /// Edit a draft ata. Approved atas reject edits.
    pub async fn update_minutes(
        &self,
        minutes_id: &str,
        update: MinutesUpdate,
    ) -> Result<Minutes, DatabaseError> {
        let current = self.get_minutes(minutes_id).await?;
        if current.status != MinutesStatus::Rascunho {
            return Err(DatabaseError::InvalidState(format!(
                "Minutes {minutes_id} are approved and can no longer be edited"
            )));
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref body) = update.body {
            sets.push(format!("body = ?{idx}"));
            params.push(body.clone().into());
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(current);
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(minutes_id.into());
        let sql = format!("UPDATE minutes SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_minutes(minutes_id).await?;

        self.audit(
            EntityType::Minutes,
            minutes_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Approve the ata (rascunho -> aprovada). One-way.
    pub async fn approve_minutes(&self, minutes_id: &str) -> Result<Minutes, DatabaseError> {
        let current = self.get_minutes(minutes_id).await?;

        if !current.status.can_transition_to(MinutesStatus::Aprovada) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot approve minutes {} in status {}",
                minutes_id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE minutes SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![MinutesStatus::Aprovada.as_str(), now.to_rfc3339(), minutes_id],
            )
            .await?;

        self.audit(
            EntityType::Minutes,
            minutes_id,
            AuditAction::StatusChanged,
            Some(serde_json::json!({
                "from": current.status.as_str(),
                "to": MinutesStatus::Aprovada.as_str(),
            })),
        )
        .await?;

        Ok(Minutes {
            status: MinutesStatus::Aprovada,
            updated_at: now,
            ..current
        })
    }

    /// Discard a draft ata. Approved atas are permanent.
    pub async fn delete_minutes(&self, minutes_id: &str) -> Result<(), DatabaseError> {
        let current = self.get_minutes(minutes_id).await?;
        if current.status != MinutesStatus::Rascunho {
            return Err(DatabaseError::InvalidState(format!(
                "Minutes {minutes_id} are approved and cannot be deleted"
            )));
        }

        self.db()
            .conn()
            .execute("DELETE FROM minutes WHERE id = ?1", [minutes_id])
            .await?;

        self.audit(EntityType::Minutes, minutes_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }
}
