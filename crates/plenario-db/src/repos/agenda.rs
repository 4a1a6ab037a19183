//! Agenda (pauta) repository — ordered items per session.
//!
//! Positions are 1-based and dense per session. Appending takes the next
//! position in a single INSERT; moving and removing renumber inside one
//! transaction so the ordering is never observably sparse.

use chrono::Utc;

use plenario_core::entities::AgendaItem;
use plenario_core::enums::{AgendaItemStatus, AuditAction, EntityType};
use plenario_core::ids::PREFIX_AGENDA_ITEM;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, to_u32};
use crate::service::ChamberService;
use crate::updates::agenda::AgendaItemUpdate;

const SELECT_COLS: &str =
    "id, session_id, document_id, position, description, status, created_at, updated_at";

fn row_to_item(row: &libsql::Row) -> Result<AgendaItem, DatabaseError> {
    Ok(AgendaItem {
        id: row.get(0)?,
        session_id: row.get(1)?,
        document_id: get_opt_string(row, 2)?,
        position: to_u32(row.get::<i64>(3)?)?,
        description: row.get(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl ChamberService {
    /// Append an item at the end of a session's agenda.
    ///
    /// The position is allocated by the INSERT itself
    /// (`COALESCE(MAX(position),0)+1`), so concurrent appends cannot collide.
    pub async fn add_agenda_item(
        &self,
        session_id: &str,
        description: &str,
        document_id: Option<&str>,
    ) -> Result<AgendaItem, DatabaseError> {
        // The FK would catch a bad session_id, but a NoResult is clearer.
        self.get_session(session_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_AGENDA_ITEM).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO agenda_items ({SELECT_COLS})
                     VALUES (?1, ?2, ?3,
                             (SELECT COALESCE(MAX(position), 0) + 1
                              FROM agenda_items WHERE session_id = ?2),
                             ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    session_id,
                    document_id,
                    description,
                    AgendaItemStatus::Pendente.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let item = self.get_agenda_item(&id).await?;

        self.audit(EntityType::AgendaItem, &id, AuditAction::Created, None)
            .await?;

        Ok(item)
    }

    pub async fn get_agenda_item(&self, id: &str) -> Result<AgendaItem, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM agenda_items WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_item(&row)
    }

    /// A session's agenda in deliberation order.
    pub async fn list_agenda(&self, session_id: &str) -> Result<Vec<AgendaItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM agenda_items
                     WHERE session_id = ?1 ORDER BY position"
                ),
                [session_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    pub async fn update_agenda_item(
        &self,
        item_id: &str,
        update: AgendaItemUpdate,
    ) -> Result<AgendaItem, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().into());
            idx += 1;
        }
        if let Some(ref document_id) = update.document_id {
            sets.push(format!("document_id = ?{idx}"));
            params.push(document_id.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_agenda_item(item_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(item_id.into());
        let sql = format!("UPDATE agenda_items SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_agenda_item(item_id).await?;

        self.audit(
            EntityType::AgendaItem,
            item_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Move an item to a new 1-based position, shifting its neighbors.
    ///
    /// The target is clamped to the agenda's length. Runs in one transaction.
    pub async fn move_agenda_item(
        &self,
        item_id: &str,
        new_position: u32,
    ) -> Result<AgendaItem, DatabaseError> {
        let item = self.get_agenda_item(item_id).await?;
        let count = {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT COUNT(*) FROM agenda_items WHERE session_id = ?1",
                    [item.session_id.as_str()],
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            to_u32(row.get::<i64>(0)?)?
        };

        let target = new_position.clamp(1, count.max(1));
        if target == item.position {
            return Ok(item);
        }

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;

        if target < item.position {
            // Moving up: everything in [target, old) shifts down one slot.
            tx.execute(
                "UPDATE agenda_items SET position = position + 1
                 WHERE session_id = ?1 AND position >= ?2 AND position < ?3",
                libsql::params![
                    item.session_id.as_str(),
                    i64::from(target),
                    i64::from(item.position)
                ],
            )
            .await?;
        } else {
            // Moving down: everything in (old, target] shifts up one slot.
            tx.execute(
                "UPDATE agenda_items SET position = position - 1
                 WHERE session_id = ?1 AND position > ?2 AND position <= ?3",
                libsql::params![
                    item.session_id.as_str(),
                    i64::from(item.position),
                    i64::from(target)
                ],
            )
            .await?;
        }

        tx.execute(
            "UPDATE agenda_items SET position = ?1, updated_at = ?2 WHERE id = ?3",
            libsql::params![i64::from(target), now.to_rfc3339(), item_id],
        )
        .await?;

        tx.commit().await?;

        self.audit(
            EntityType::AgendaItem,
            item_id,
            AuditAction::Reordered,
            Some(serde_json::json!({ "from": item.position, "to": target })),
        )
        .await?;

        self.get_agenda_item(item_id).await
    }

    /// Mark an item as dealt with (pendente -> concluido).
    pub async fn complete_agenda_item(&self, item_id: &str) -> Result<AgendaItem, DatabaseError> {
        let current = self.get_agenda_item(item_id).await?;

        if !current.status.can_transition_to(AgendaItemStatus::Concluido) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot complete agenda item {} in status {}",
                item_id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE agenda_items SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![
                    AgendaItemStatus::Concluido.as_str(),
                    now.to_rfc3339(),
                    item_id
                ],
            )
            .await?;

        self.audit(
            EntityType::AgendaItem,
            item_id,
            AuditAction::StatusChanged,
            Some(serde_json::json!({
                "from": current.status.as_str(),
                "to": AgendaItemStatus::Concluido.as_str(),
            })),
        )
        .await?;

        Ok(AgendaItem {
            status: AgendaItemStatus::Concluido,
            updated_at: now,
            ..current
        })
    }

    /// Remove an item and close the position gap it leaves.
    pub async fn remove_agenda_item(&self, item_id: &str) -> Result<(), DatabaseError> {
        let item = self.get_agenda_item(item_id).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute("DELETE FROM agenda_items WHERE id = ?1", [item_id])
            .await?;
        tx.execute(
            "UPDATE agenda_items SET position = position - 1
             WHERE session_id = ?1 AND position > ?2",
            libsql::params![item.session_id.as_str(), i64::from(item.position)],
        )
        .await?;
        tx.commit().await?;

        self.audit(EntityType::AgendaItem, item_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }
}
