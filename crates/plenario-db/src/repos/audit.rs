//! Audit trail repository.
//!
//! Append-only audit entries recording every mutation. Supports dynamic
//! filtering by entity, action, actor, and period.

use chrono::{DateTime, Utc};

use plenario_core::entities::AuditEntry;
use plenario_core::enums::{AuditAction, EntityType};
use plenario_core::ids::PREFIX_AUDIT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_json};
use crate::service::ChamberService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<String>,
    pub action: Option<AuditAction>,
    pub actor_id: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

impl ChamberService {
    /// Append an audit entry. Called by every mutation method.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_audit(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        self.db().conn().execute(
            "INSERT INTO audit_trail (id, actor_id, entity_type, entity_id, action, detail, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            libsql::params![
                entry.id.as_str(),
                entry.actor_id.as_deref(),
                entry.entity_type.as_str(),
                entry.entity_id.as_str(),
                entry.action.as_str(),
                entry.detail.as_ref().map(std::string::ToString::to_string).as_deref(),
                entry.created_at.to_rfc3339()
            ],
        ).await?;
        Ok(())
    }

    /// Build and append an audit entry for a mutation on the given entity.
    ///
    /// Generates the entry ID and stamps the service's actor. Repo methods
    /// call this after their SQL succeeds.
    pub(crate) async fn audit(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        action: AuditAction,
        detail: Option<serde_json::Value>,
    ) -> Result<(), DatabaseError> {
        let id = self.db().generate_id(PREFIX_AUDIT).await?;
        self.append_audit(&AuditEntry {
            id,
            actor_id: self.actor().map(String::from),
            entity_type,
            entity_id: entity_id.to_string(),
            action,
            detail,
            created_at: Utc::now(),
        })
        .await
    }

    /// Query audit entries with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref et) = filter.entity_type {
            params.push(libsql::Value::Text(et.as_str().to_string()));
            conditions.push(format!("entity_type = ?{}", params.len()));
        }
        if let Some(ref eid) = filter.entity_id {
            params.push(libsql::Value::Text(eid.clone()));
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(ref action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }
        if let Some(ref actor) = filter.actor_id {
            params.push(libsql::Value::Text(actor.clone()));
            conditions.push(format!("actor_id = ?{}", params.len()));
        }
        if let Some(ref since) = filter.since {
            params.push(libsql::Value::Text(since.to_rfc3339()));
            conditions.push(format!("created_at >= ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, actor_id, entity_type, entity_id, action, detail, created_at
             FROM audit_trail {where_clause}
             ORDER BY created_at DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(AuditEntry {
                id: row.get::<String>(0)?,
                actor_id: get_opt_string(&row, 1)?,
                entity_type: parse_enum(&row.get::<String>(2)?)?,
                entity_id: row.get::<String>(3)?,
                action: parse_enum(&row.get::<String>(4)?)?,
                detail: parse_optional_json(get_opt_string(&row, 5)?.as_deref())?,
                created_at: parse_datetime(&row.get::<String>(6)?)?,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_councilor, test_service};

    #[tokio::test]
    async fn mutation_appends_audit_entry() {
        let svc = test_service().await;
        let ver = test_councilor(&svc, "Ana Souza", "PSD").await;

        let entries = svc
            .query_audit(&AuditFilter {
                entity_id: Some(ver.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Councilor);
        assert_eq!(entries[0].action, AuditAction::Created);
        assert_eq!(entries[0].actor_id, None);
    }

    #[tokio::test]
    async fn actor_is_recorded() {
        let db = crate::ChamberDb::open_local(":memory:").await.unwrap();
        let svc = crate::service::ChamberService::from_db(db).with_actor("usr-11223344");

        let ver = test_councilor(&svc, "Bruno Lima", "MDB").await;

        let entries = svc
            .query_audit(&AuditFilter {
                entity_id: Some(ver),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries[0].actor_id.as_deref(), Some("usr-11223344"));
    }

    #[tokio::test]
    async fn filter_by_action() {
        let svc = test_service().await;
        test_councilor(&svc, "Ana", "PSD").await;
        test_councilor(&svc, "Bruno", "MDB").await;

        let created = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Created),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.len(), 2);

        let deleted = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Deleted),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(deleted.is_empty());
    }
}
