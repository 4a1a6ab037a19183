//! Shared test utilities for plenario-db tests.

pub(crate) mod helpers {
    use chrono::{TimeZone, Utc};

    use crate::ChamberDb;
    use crate::service::ChamberService;
    use plenario_core::enums::SessionKind;

    /// Create an in-memory `ChamberService` (no cloud sync, no actor).
    pub async fn test_service() -> ChamberService {
        let db = ChamberDb::open_local(":memory:").await.unwrap();
        ChamberService::from_db(db)
    }

    /// Create a councilor and return its ID (convenience for seat/opinion tests).
    pub async fn test_councilor(svc: &ChamberService, name: &str, party: &str) -> String {
        svc.create_councilor(name, None, party, None, None)
            .await
            .unwrap()
            .id
    }

    /// Schedule an ordinary session and return its ID.
    pub async fn test_session(svc: &ChamberService, number: u32) -> String {
        let scheduled = Utc.with_ymd_and_hms(2025, 8, 12, 19, 0, 0).unwrap();
        svc.schedule_session(number, SessionKind::Ordinaria, 2025, scheduled)
            .await
            .unwrap()
            .id
    }

    /// Protocol a document and return its ID.
    pub async fn test_document(svc: &ChamberService, subject: &str) -> String {
        use plenario_core::enums::DocumentKind;
        svc.protocol_document(DocumentKind::Mocao, 2025, subject, None, None)
            .await
            .unwrap()
            .id
    }
}
