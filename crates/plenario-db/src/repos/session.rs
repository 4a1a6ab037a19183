//! Session repository — scheduling, lifecycle transitions, FTS.

use chrono::{DateTime, Utc};

use plenario_core::audit_detail::StatusChangedDetail;
use plenario_core::entities::Session;
use plenario_core::enums::{AuditAction, EntityType, SessionKind, SessionStatus};
use plenario_core::ids::PREFIX_SESSION;
use plenario_core::titles;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, to_u32};
use crate::service::ChamberService;
use crate::updates::session::SessionUpdate;

const SELECT_COLS: &str =
    "id, number, year, kind, status, scheduled_for, title, created_at, updated_at";

fn row_to_session(row: &libsql::Row) -> Result<Session, DatabaseError> {
    Ok(Session {
        id: row.get(0)?,
        number: to_u32(row.get::<i64>(1)?)?,
        year: i32::try_from(row.get::<i64>(2)?)
            .map_err(|_| DatabaseError::Query("year out of range".into()))?,
        kind: parse_enum(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        scheduled_for: parse_datetime(&row.get::<String>(5)?)?,
        title: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ChamberService {
    /// Schedule a session. The title is generated from (number, kind, year)
    /// with the ordinal spelled out; the UNIQUE constraint on the business
    /// key makes a duplicate schedule fail at the INSERT itself.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the number is outside 1..=999,
    /// or a query error for duplicates.
    pub async fn schedule_session(
        &self,
        number: u32,
        kind: SessionKind,
        year: i32,
        scheduled_for: DateTime<Utc>,
    ) -> Result<Session, DatabaseError> {
        let title = titles::session_title(number, kind, year)?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SESSION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO sessions ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    i64::from(number),
                    i64::from(year),
                    kind.as_str(),
                    SessionStatus::Agendada.as_str(),
                    scheduled_for.to_rfc3339(),
                    title.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let session = Session {
            id: id.clone(),
            number,
            year,
            kind,
            status: SessionStatus::Agendada,
            scheduled_for,
            title,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Session, &id, AuditAction::Created, None)
            .await?;

        Ok(session)
    }

    pub async fn get_session(&self, id: &str) -> Result<Session, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sessions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_session(&row)
    }

    /// List sessions, most recently scheduled first. An optional status
    /// narrows the listing.
    pub async fn list_sessions(
        &self,
        status: Option<SessionStatus>,
        limit: u32,
    ) -> Result<Vec<Session>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM sessions WHERE status = ?1
                             ORDER BY scheduled_for DESC LIMIT {limit}"
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
                            "SELECT {SELECT_COLS} FROM sessions
                             ORDER BY scheduled_for DESC LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }
        Ok(sessions)
    }

    /// Reschedule a session. The business key and title are immutable.
    pub async fn update_session(
        &self,
        session_id: &str,
        update: SessionUpdate,
    ) -> Result<Session, DatabaseError> {
        let Some(scheduled_for) = update.scheduled_for else {
            return self.get_session(session_id).await;
        };

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE sessions SET scheduled_for = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![scheduled_for.to_rfc3339(), now.to_rfc3339(), session_id],
            )
            .await?;

        let updated = self.get_session(session_id).await?;

        self.audit(
            EntityType::Session,
            session_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Move a session through its lifecycle, enforcing the transition table.
    pub async fn transition_session(
        &self,
        session_id: &str,
        new_status: SessionStatus,
        reason: Option<&str>,
    ) -> Result<Session, DatabaseError> {
        let current = self.get_session(session_id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition session {} from {} to {}",
                session_id, current.status, new_status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE sessions SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![new_status.as_str(), now.to_rfc3339(), session_id],
            )
            .await?;

        let updated = Session {
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
            EntityType::Session,
            session_id,
            AuditAction::StatusChanged,
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM sessions WHERE id = ?1", [session_id])
            .await?;

        self.audit(EntityType::Session, session_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }

    /// FTS5 search over session titles.
    pub async fn search_sessions(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Session>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.id, s.number, s.year, s.kind, s.status, s.scheduled_for, \
                 s.title, s.created_at, s.updated_at \
                 FROM sessions_fts \
                 JOIN sessions s ON s.rowid = sessions_fts.rowid \
                 WHERE sessions_fts MATCH ?1 \
                 ORDER BY rank LIMIT ?2",
                libsql::params![query, limit],
            )
            .await?;

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::session::SessionUpdateBuilder;
    use chrono::TimeZone;

    fn evening(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, day, 19, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn schedule_session_generates_title() {
        let svc = test_service().await;

        let session = svc
            .schedule_session(23, SessionKind::Ordinaria, 2025, evening(12))
            .await
            .unwrap();

        assert!(session.id.starts_with("ses-"));
        assert_eq!(session.title, "Vigésima Terceira Sessão Ordinária de 2025");
        assert_eq!(session.status, SessionStatus::Agendada);
    }

    #[tokio::test]
    async fn duplicate_business_key_fails() {
        let svc = test_service().await;

        svc.schedule_session(23, SessionKind::Ordinaria, 2025, evening(12))
            .await
            .unwrap();
        let dup = svc
            .schedule_session(23, SessionKind::Ordinaria, 2025, evening(13))
            .await;
        assert!(dup.is_err(), "same (number, kind, year) must be rejected");

        // Same number, different kind is a distinct session.
        svc.schedule_session(23, SessionKind::Extraordinaria, 2025, evening(13))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn schedule_session_rejects_number_zero() {
        let svc = test_service().await;
        let result = svc
            .schedule_session(0, SessionKind::Ordinaria, 2025, evening(12))
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn reschedule_keeps_title() {
        let svc = test_service().await;
        let session = svc
            .schedule_session(5, SessionKind::Solene, 2025, evening(12))
            .await
            .unwrap();

        let update = SessionUpdateBuilder::new().scheduled_for(evening(20)).build();
        let updated = svc.update_session(&session.id, update).await.unwrap();
        assert_eq!(updated.scheduled_for, evening(20));
        assert_eq!(updated.title, session.title);
    }

    #[tokio::test]
    async fn transition_lifecycle() {
        let svc = test_service().await;
        let session = svc
            .schedule_session(1, SessionKind::Ordinaria, 2025, evening(1))
            .await
            .unwrap();

        let started = svc
            .transition_session(&session.id, SessionStatus::EmAndamento, None)
            .await
            .unwrap();
        assert_eq!(started.status, SessionStatus::EmAndamento);

        let suspended = svc
            .transition_session(&session.id, SessionStatus::Suspensa, Some("quorum"))
            .await
            .unwrap();
        assert_eq!(suspended.status, SessionStatus::Suspensa);

        svc.transition_session(&session.id, SessionStatus::EmAndamento, None)
            .await
            .unwrap();
        let held = svc
            .transition_session(&session.id, SessionStatus::Realizada, None)
            .await
            .unwrap();
        assert_eq!(held.status, SessionStatus::Realizada);
    }

    #[tokio::test]
    async fn transition_rejects_undocumented_move() {
        let svc = test_service().await;
        let session = svc
            .schedule_session(2, SessionKind::Ordinaria, 2025, evening(2))
            .await
            .unwrap();

        let result = svc
            .transition_session(&session.id, SessionStatus::Realizada, None)
            .await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn list_sessions_by_status() {
        let svc = test_service().await;
        let a = svc
            .schedule_session(1, SessionKind::Ordinaria, 2025, evening(1))
            .await
            .unwrap();
        svc.schedule_session(2, SessionKind::Ordinaria, 2025, evening(8))
            .await
            .unwrap();

        svc.transition_session(&a.id, SessionStatus::Cancelada, None)
            .await
            .unwrap();

        let scheduled = svc
            .list_sessions(Some(SessionStatus::Agendada), 10)
            .await
            .unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].number, 2);

        let all = svc.list_sessions(None, 10).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn search_sessions_by_title() {
        let svc = test_service().await;
        svc.schedule_session(23, SessionKind::Ordinaria, 2025, evening(12))
            .await
            .unwrap();
        svc.schedule_session(3, SessionKind::Solene, 2025, evening(15))
            .await
            .unwrap();

        let results = svc.search_sessions("Solene", 10).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].number, 3);
    }
}
