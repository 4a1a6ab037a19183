//! Directing board (mesa diretora) repository.
//!
//! One board per legislature period, with six fixed seats. Seat persistence
//! mirrors the committee repo: only filled seats are stored, and a save
//! replaces the board's rows in one transaction.

use chrono::Utc;

use plenario_core::audit_detail::SeatDetail;
use plenario_core::entities::{Board, BoardSeat};
use plenario_core::enums::{AuditAction, BoardRole, EntityType};
use plenario_core::ids::PREFIX_BOARD;
use plenario_core::seats::SeatMap;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::ChamberService;

const SELECT_COLS: &str = "id, legislature, created_at, updated_at";

fn row_to_board(row: &libsql::Row) -> Result<Board, DatabaseError> {
    Ok(Board {
        id: row.get(0)?,
        legislature: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

fn row_to_seat(row: &libsql::Row) -> Result<BoardSeat, DatabaseError> {
    Ok(BoardSeat {
        board_id: row.get(0)?,
        role: parse_enum(&row.get::<String>(1)?)?,
        councilor_id: row.get(2)?,
        assigned_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ChamberService {
    /// Create the board for a legislature period. The period label is unique.
    pub async fn create_board(&self, legislature: &str) -> Result<Board, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_BOARD).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO boards ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4)"
                ),
                libsql::params![id.as_str(), legislature, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await?;

        let board = Board {
            id: id.clone(),
            legislature: legislature.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Board, &id, AuditAction::Created, None)
            .await?;

        Ok(board)
    }

    pub async fn get_board(&self, id: &str) -> Result<Board, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM boards WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_board(&row)
    }

    pub async fn list_boards(&self, limit: u32) -> Result<Vec<Board>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM boards ORDER BY legislature DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut boards = Vec::new();
        while let Some(row) = rows.next().await? {
            boards.push(row_to_board(&row)?);
        }
        Ok(boards)
    }

    pub async fn delete_board(&self, board_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM boards WHERE id = ?1", [board_id])
            .await?;

        self.audit(EntityType::Board, board_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }

    /// Stored seat rows for a board.
    pub async fn list_board_seats(&self, board_id: &str) -> Result<Vec<BoardSeat>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT board_id, role, councilor_id, assigned_at
                 FROM board_seats WHERE board_id = ?1 ORDER BY role",
                [board_id],
            )
            .await?;

        let mut seats = Vec::new();
        while let Some(row) = rows.next().await? {
            seats.push(row_to_seat(&row)?);
        }
        Ok(seats)
    }

    /// Load the board's six-seat map, filled or not.
    pub async fn board_seat_map(&self, board_id: &str) -> Result<SeatMap<BoardRole>, DatabaseError> {
        // Validate the board exists; an empty map for a missing board would lie.
        self.get_board(board_id).await?;
        let mut map = SeatMap::board();

        for seat in self.list_board_seats(board_id).await? {
            map.assign(seat.role, seat.councilor_id)
                .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
        }

        Ok(map)
    }

    /// Replace the board's composition with the given seat map.
    ///
    /// Filled seats are audited as assigned, vacated seats as cleared.
    pub async fn assign_board_seats(
        &self,
        board_id: &str,
        map: &SeatMap<BoardRole>,
    ) -> Result<(), DatabaseError> {
        self.get_board(board_id).await?;
        let prior = self.list_board_seats(board_id).await?;

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;

        tx.execute("DELETE FROM board_seats WHERE board_id = ?1", [board_id])
            .await?;

        let mut details = Vec::new();
        for (role, councilor_id) in map.filled() {
            tx.execute(
                "INSERT INTO board_seats (board_id, role, councilor_id, assigned_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![board_id, role.as_str(), councilor_id, now.to_rfc3339()],
            )
            .await?;
            details.push(SeatDetail {
                role: role.as_str().to_string(),
                councilor_id: Some(councilor_id.to_string()),
            });
        }

        tx.commit().await?;

        let filled_roles: std::collections::HashSet<&str> =
            map.filled().map(|(role, _)| role.as_str()).collect();
        let cleared: Vec<SeatDetail> = prior
            .iter()
            .filter(|seat| !filled_roles.contains(seat.role.as_str()))
            .map(|seat| SeatDetail {
                role: seat.role.as_str().to_string(),
                councilor_id: Some(seat.councilor_id.clone()),
            })
            .collect();

        if !details.is_empty() {
            self.audit(
                EntityType::Board,
                board_id,
                AuditAction::SeatAssigned,
                Some(serde_json::to_value(&details).map_err(|e| DatabaseError::Other(e.into()))?),
            )
            .await?;
        }
        if !cleared.is_empty() {
            self.audit(
                EntityType::Board,
                board_id,
                AuditAction::SeatCleared,
                Some(serde_json::to_value(&cleared).map_err(|e| DatabaseError::Other(e.into()))?),
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_councilor, test_service};

    #[tokio::test]
    async fn create_board_roundtrip() {
        let svc = test_service().await;

        let board = svc.create_board("2025-2026").await.unwrap();
        assert!(board.id.starts_with("mes-"));

        let fetched = svc.get_board(&board.id).await.unwrap();
        assert_eq!(fetched.legislature, "2025-2026");
    }

    #[tokio::test]
    async fn duplicate_legislature_rejected() {
        let svc = test_service().await;
        svc.create_board("2025-2026").await.unwrap();
        assert!(svc.create_board("2025-2026").await.is_err());
    }

    #[tokio::test]
    async fn board_has_six_seats() {
        let svc = test_service().await;
        let board = svc.create_board("2025-2026").await.unwrap();

        let map = svc.board_seat_map(&board.id).await.unwrap();
        assert_eq!(map.seats().len(), 6);
        assert!(map.filled().next().is_none(), "new board starts empty");
    }

    #[tokio::test]
    async fn assign_board_seats_roundtrip() {
        let svc = test_service().await;
        let board = svc.create_board("2025-2026").await.unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;
        let bruno = test_councilor(&svc, "Bruno", "MDB").await;

        let mut map = SeatMap::board();
        map.assign(BoardRole::Presidente, ana.clone()).unwrap();
        map.assign(BoardRole::PrimeiroSecretario, bruno.clone()).unwrap();
        svc.assign_board_seats(&board.id, &map).await.unwrap();

        let loaded = svc.board_seat_map(&board.id).await.unwrap();
        assert_eq!(loaded.occupant(BoardRole::Presidente), Some(ana.as_str()));
        assert_eq!(
            loaded.occupant(BoardRole::PrimeiroSecretario),
            Some(bruno.as_str())
        );
        assert_eq!(loaded.occupant(BoardRole::VicePresidente), None);
    }

    #[tokio::test]
    async fn clearing_a_board_seat_is_audited() {
        let svc = test_service().await;
        let board = svc.create_board("2025-2026").await.unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;

        let mut map = SeatMap::board();
        map.assign(BoardRole::Presidente, ana.clone()).unwrap();
        svc.assign_board_seats(&board.id, &map).await.unwrap();

        let mut map = svc.board_seat_map(&board.id).await.unwrap();
        map.clear(BoardRole::Presidente).unwrap();
        svc.assign_board_seats(&board.id, &map).await.unwrap();

        let entries = svc
            .query_audit(&crate::repos::audit::AuditFilter {
                entity_id: Some(board.id.clone()),
                action: Some(AuditAction::SeatCleared),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        let detail = entries[0].detail.as_ref().unwrap();
        assert_eq!(detail[0]["role"], "presidente");
        assert_eq!(detail[0]["councilor_id"], ana);
    }

    #[tokio::test]
    async fn seat_map_for_missing_board_fails() {
        let svc = test_service().await;
        assert!(matches!(
            svc.board_seat_map("mes-deadbeef").await,
            Err(DatabaseError::NoResult)
        ));
    }
}
