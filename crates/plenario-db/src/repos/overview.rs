//! Chamber overview — the dashboard counts in one query.

use plenario_core::responses::ChamberOverview;

use crate::error::DatabaseError;
use crate::service::ChamberService;

impl ChamberService {
    /// Aggregate counts across the chamber's working state.
    pub async fn chamber_overview(&self) -> Result<ChamberOverview, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT
                    (SELECT COUNT(*) FROM sessions WHERE status = 'agendada'),
                    (SELECT COUNT(*) FROM sessions WHERE status = 'em_andamento'),
                    (SELECT COUNT(*) FROM documents WHERE status = 'em_tramitacao'),
                    (SELECT COUNT(*) FROM opinions WHERE status = 'pendente'),
                    (SELECT COUNT(*) FROM agenda_items WHERE status = 'pendente'),
                    (SELECT COUNT(*) FROM minutes WHERE status = 'rascunho'),
                    (SELECT COUNT(*) FROM councilors WHERE active = 1)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(ChamberOverview {
            scheduled_sessions: row.get(0)?,
            sessions_in_progress: row.get(1)?,
            documents_in_tramitacao: row.get(2)?,
            pending_opinions: row.get(3)?,
            pending_agenda_items: row.get(4)?,
            draft_minutes: row.get(5)?,
            active_councilors: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{test_councilor, test_document, test_service, test_session};
    use plenario_core::enums::DocumentStatus;

    #[tokio::test]
    async fn empty_chamber_counts_zero() {
        let svc = test_service().await;
        let overview = svc.chamber_overview().await.unwrap();
        assert_eq!(overview.scheduled_sessions, 0);
        assert_eq!(overview.active_councilors, 0);
    }

    #[tokio::test]
    async fn overview_tracks_working_state() {
        let svc = test_service().await;

        test_councilor(&svc, "Ana", "PSD").await;
        test_councilor(&svc, "Bruno", "MDB").await;
        let ses = test_session(&svc, 1).await;
        svc.add_agenda_item(&ses, "Expediente", None).await.unwrap();
        svc.draft_minutes(&ses, None).await.unwrap();

        let doc = test_document(&svc, "Projeto").await;
        svc.transition_document(&doc, DocumentStatus::EmTramitacao, None)
            .await
            .unwrap();

        let overview = svc.chamber_overview().await.unwrap();
        assert_eq!(overview.scheduled_sessions, 1);
        assert_eq!(overview.sessions_in_progress, 0);
        assert_eq!(overview.documents_in_tramitacao, 1);
        assert_eq!(overview.pending_agenda_items, 1);
        assert_eq!(overview.draft_minutes, 1);
        assert_eq!(overview.active_councilors, 2);
    }
}
