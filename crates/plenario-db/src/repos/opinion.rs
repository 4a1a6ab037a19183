//! Opinion (parecer) repository — committee review of documents.
//!
//! An opinion is requested from a committee while the document tramita, then
//! recorded once with a verdict. Recording concludes the opinion; concluded
//! opinions are immutable.

use chrono::Utc;

use plenario_core::entities::Opinion;
use plenario_core::enums::{AuditAction, EntityType, OpinionStatus, OpinionVerdict};
use plenario_core::ids::PREFIX_OPINION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_enum};
use crate::service::ChamberService;
use crate::updates::opinion::OpinionUpdate;

const SELECT_COLS: &str =
    "id, committee_id, document_id, rapporteur_id, verdict, body, status, created_at, updated_at";

fn row_to_opinion(row: &libsql::Row) -> Result<Opinion, DatabaseError> {
    Ok(Opinion {
        id: row.get(0)?,
        committee_id: row.get(1)?,
        document_id: row.get(2)?,
        rapporteur_id: get_opt_string(row, 3)?,
        verdict: parse_optional_enum(get_opt_string(row, 4)?.as_deref())?,
        body: get_opt_string(row, 5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ChamberService {
    /// Request an opinion from a committee on a document.
    pub async fn request_opinion(
        &self,
        committee_id: &str,
        document_id: &str,
        rapporteur_id: Option<&str>,
    ) -> Result<Opinion, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_OPINION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO opinions ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, NULL, NULL, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    committee_id,
                    document_id,
                    rapporteur_id,
                    OpinionStatus::Pendente.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let opinion = Opinion {
            id: id.clone(),
            committee_id: committee_id.to_string(),
            document_id: document_id.to_string(),
            rapporteur_id: rapporteur_id.map(String::from),
            verdict: None,
            body: None,
            status: OpinionStatus::Pendente,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Opinion, &id, AuditAction::Created, None)
            .await?;

        Ok(opinion)
    }

    pub async fn get_opinion(&self, id: &str) -> Result<Opinion, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM opinions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_opinion(&row)
    }

    /// List opinions, pending first. Optional document filter.
    pub async fn list_opinions(
        &self,
        document_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Opinion>, DatabaseError> {
        let mut rows = match document_id {
            Some(doc) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM opinions WHERE document_id = ?1
                             ORDER BY status DESC, created_at DESC LIMIT {limit}"
                        ),
                        [doc],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM opinions
                             ORDER BY status DESC, created_at DESC LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut opinions = Vec::new();
        while let Some(row) = rows.next().await? {
            opinions.push(row_to_opinion(&row)?);
        }
        Ok(opinions)
    }

    /// Adjust a pending opinion (rapporteur, draft body).
    pub async fn update_opinion(
        &self,
        opinion_id: &str,
        update: OpinionUpdate,
    ) -> Result<Opinion, DatabaseError> {
        let current = self.get_opinion(opinion_id).await?;
        if current.status != OpinionStatus::Pendente {
            return Err(DatabaseError::InvalidState(format!(
                "Opinion {opinion_id} is concluded and can no longer be edited"
            )));
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref rapporteur_id) = update.rapporteur_id {
            sets.push(format!("rapporteur_id = ?{idx}"));
            params.push(rapporteur_id.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref body) = update.body {
            sets.push(format!("body = ?{idx}"));
            params.push(body.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(current);
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(opinion_id.into());
        let sql = format!("UPDATE opinions SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_opinion(opinion_id).await?;

        self.audit(
            EntityType::Opinion,
            opinion_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Record the committee's verdict, concluding the opinion.
    pub async fn record_opinion(
        &self,
        opinion_id: &str,
        verdict: OpinionVerdict,
        body: &str,
    ) -> Result<Opinion, DatabaseError> {
        let current = self.get_opinion(opinion_id).await?;

        if !current.status.can_transition_to(OpinionStatus::Concluido) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot record opinion {} in status {}",
                opinion_id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE opinions SET verdict = ?1, body = ?2, status = ?3, updated_at = ?4
                 WHERE id = ?5",
                libsql::params![
                    verdict.as_str(),
                    body,
                    OpinionStatus::Concluido.as_str(),
                    now.to_rfc3339(),
                    opinion_id
                ],
            )
            .await?;

        self.audit(
            EntityType::Opinion,
            opinion_id,
            AuditAction::StatusChanged,
            Some(serde_json::json!({
                "from": current.status.as_str(),
                "to": OpinionStatus::Concluido.as_str(),
                "verdict": verdict.as_str(),
            })),
        )
        .await?;

        Ok(Opinion {
            verdict: Some(verdict),
            body: Some(body.to_string()),
            status: OpinionStatus::Concluido,
            updated_at: now,
            ..current
        })
    }

    /// Withdraw a pending opinion request.
    pub async fn delete_opinion(&self, opinion_id: &str) -> Result<(), DatabaseError> {
        let current = self.get_opinion(opinion_id).await?;
        if current.status != OpinionStatus::Pendente {
            return Err(DatabaseError::InvalidState(format!(
                "Opinion {opinion_id} is concluded and cannot be withdrawn"
            )));
        }

        self.db()
            .conn()
            .execute("DELETE FROM opinions WHERE id = ?1", [opinion_id])
            .await?;

        self.audit(EntityType::Opinion, opinion_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }
}
