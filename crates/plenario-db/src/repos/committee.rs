//! Committee repository — CRUD plus role-seat persistence.
//!
//! Seats live in `committee_seats` as one row per filled seat. Saving a
//! `SeatMap` replaces the committee's rows inside one transaction, so a
//! partially applied composition is never visible.

use chrono::Utc;

use plenario_core::audit_detail::SeatDetail;
use plenario_core::entities::{Committee, CommitteeSeat};
use plenario_core::enums::{AuditAction, CommitteeKind, EntityType};
use plenario_core::ids::PREFIX_COMMITTEE;
use plenario_core::seats::{CommitteeSeatKey, SeatMap};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, to_u8};
use crate::service::ChamberService;
use crate::updates::committee::CommitteeUpdate;

const SELECT_COLS: &str =
    "id, name, kind, description, membro_seats, created_at, updated_at";

fn row_to_committee(row: &libsql::Row) -> Result<Committee, DatabaseError> {
    Ok(Committee {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: parse_enum(&row.get::<String>(2)?)?,
        description: get_opt_string(row, 3)?,
        membro_seats: to_u8(row.get::<i64>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

fn row_to_seat(row: &libsql::Row) -> Result<CommitteeSeat, DatabaseError> {
    Ok(CommitteeSeat {
        committee_id: row.get(0)?,
        role: row.get(1)?,
        councilor_id: row.get(2)?,
        assigned_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ChamberService {
    pub async fn create_committee(
        &self,
        name: &str,
        kind: CommitteeKind,
        description: Option<&str>,
        membro_seats: u8,
    ) -> Result<Committee, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMMITTEE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO committees ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    name,
                    kind.as_str(),
                    description,
                    i64::from(membro_seats),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let committee = Committee {
            id: id.clone(),
            name: name.to_string(),
            kind,
            description: description.map(String::from),
            membro_seats,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Committee, &id, AuditAction::Created, None)
            .await?;

        Ok(committee)
    }

    pub async fn get_committee(&self, id: &str) -> Result<Committee, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM committees WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_committee(&row)
    }

    pub async fn list_committees(&self, limit: u32) -> Result<Vec<Committee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM committees ORDER BY name LIMIT {limit}"),
                (),
            )
            .await?;

        let mut committees = Vec::new();
        while let Some(row) = rows.next().await? {
            committees.push(row_to_committee(&row)?);
        }
        Ok(committees)
    }

    pub async fn update_committee(
        &self,
        committee_id: &str,
        update: CommitteeUpdate,
    ) -> Result<Committee, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(membro_seats) = update.membro_seats {
            sets.push(format!("membro_seats = ?{idx}"));
            params.push(i64::from(membro_seats).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_committee(committee_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(committee_id.into());
        let sql = format!("UPDATE committees SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_committee(committee_id).await?;

        self.audit(
            EntityType::Committee,
            committee_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Delete a committee. Its seat rows go with it (ON DELETE CASCADE).
    pub async fn delete_committee(&self, committee_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM committees WHERE id = ?1", [committee_id])
            .await?;

        self.audit(EntityType::Committee, committee_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }

    /// Stored seat rows for a committee, ordered by role.
    pub async fn list_committee_seats(
        &self,
        committee_id: &str,
    ) -> Result<Vec<CommitteeSeat>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT committee_id, role, councilor_id, assigned_at
                 FROM committee_seats WHERE committee_id = ?1 ORDER BY role",
                [committee_id],
            )
            .await?;

        let mut seats = Vec::new();
        while let Some(row) = rows.next().await? {
            seats.push(row_to_seat(&row)?);
        }
        Ok(seats)
    }

    /// Load the committee's full seat map: every fixed seat, filled or not.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if a stored role string does not
    /// parse as a seat key or falls outside the committee's seat list.
    pub async fn committee_seat_map(
        &self,
        committee_id: &str,
    ) -> Result<SeatMap<CommitteeSeatKey>, DatabaseError> {
        let committee = self.get_committee(committee_id).await?;
        let mut map = SeatMap::committee(committee.membro_seats);

        for seat in self.list_committee_seats(committee_id).await? {
            let key = CommitteeSeatKey::parse(&seat.role).ok_or_else(|| {
                DatabaseError::InvalidState(format!(
                    "Unknown committee seat role '{}' stored for {committee_id}",
                    seat.role
                ))
            })?;
            map.assign(key, seat.councilor_id)
                .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
        }

        Ok(map)
    }

    /// Replace a committee's composition with the given seat map.
    ///
    /// Only filled seats are stored. The delete and inserts run in one
    /// transaction; a duplicate occupant or role aborts the whole save.
    /// Filled seats are audited as assigned, vacated seats as cleared.
    pub async fn assign_committee_seats(
        &self,
        committee_id: &str,
        map: &SeatMap<CommitteeSeatKey>,
    ) -> Result<(), DatabaseError> {
        // Validate the committee exists before touching seat rows.
        self.get_committee(committee_id).await?;
        let prior = self.list_committee_seats(committee_id).await?;

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;

        tx.execute(
            "DELETE FROM committee_seats WHERE committee_id = ?1",
            [committee_id],
        )
        .await?;

        let mut details = Vec::new();
        for (key, councilor_id) in map.filled() {
            tx.execute(
                "INSERT INTO committee_seats (committee_id, role, councilor_id, assigned_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    committee_id,
                    key.to_string(),
                    councilor_id,
                    now.to_rfc3339()
                ],
            )
            .await?;
            details.push(SeatDetail {
                role: key.to_string(),
                councilor_id: Some(councilor_id.to_string()),
            });
        }

        tx.commit().await?;

        let filled_roles: std::collections::HashSet<String> =
            map.filled().map(|(key, _)| key.to_string()).collect();
        let cleared: Vec<SeatDetail> = prior
            .iter()
            .filter(|seat| !filled_roles.contains(&seat.role))
            .map(|seat| SeatDetail {
                role: seat.role.clone(),
                councilor_id: Some(seat.councilor_id.clone()),
            })
            .collect();

        if !details.is_empty() {
            self.audit(
                EntityType::Committee,
                committee_id,
                AuditAction::SeatAssigned,
                Some(serde_json::to_value(&details).map_err(|e| DatabaseError::Other(e.into()))?),
            )
            .await?;
        }
        if !cleared.is_empty() {
            self.audit(
                EntityType::Committee,
                committee_id,
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
    use crate::updates::committee::CommitteeUpdateBuilder;

    #[tokio::test]
    async fn create_committee_roundtrip() {
        let svc = test_service().await;

        let com = svc
            .create_committee(
                "Comissão de Finanças e Orçamento",
                CommitteeKind::Permanente,
                Some("Análise orçamentária"),
                3,
            )
            .await
            .unwrap();

        assert!(com.id.starts_with("com-"));
        assert_eq!(com.membro_seats, 3);

        let fetched = svc.get_committee(&com.id).await.unwrap();
        assert_eq!(fetched.kind, CommitteeKind::Permanente);
    }

    #[tokio::test]
    async fn update_committee_seat_count() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Educação", CommitteeKind::Permanente, None, 3)
            .await
            .unwrap();

        let update = CommitteeUpdateBuilder::new().membro_seats(5).build();
        let updated = svc.update_committee(&com.id, update).await.unwrap();
        assert_eq!(updated.membro_seats, 5);
    }

    #[tokio::test]
    async fn assign_and_load_seat_map() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Saúde", CommitteeKind::Permanente, None, 2)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;
        let bruno = test_councilor(&svc, "Bruno", "MDB").await;

        let mut map = SeatMap::committee(2);
        map.assign(CommitteeSeatKey::Presidente, ana.clone()).unwrap();
        map.assign(CommitteeSeatKey::Membro(1), bruno.clone()).unwrap();

        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        let loaded = svc.committee_seat_map(&com.id).await.unwrap();
        assert_eq!(loaded.occupant(CommitteeSeatKey::Presidente), Some(ana.as_str()));
        assert_eq!(loaded.occupant(CommitteeSeatKey::Relator), None);
        assert_eq!(loaded.occupant(CommitteeSeatKey::Membro(1)), Some(bruno.as_str()));
        // Only filled seats hit the database
        assert_eq!(svc.list_committee_seats(&com.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reassign_replaces_composition() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Obras", CommitteeKind::Temporaria, None, 1)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;
        let bruno = test_councilor(&svc, "Bruno", "MDB").await;

        let mut first = SeatMap::committee(1);
        first.assign(CommitteeSeatKey::Presidente, ana.clone()).unwrap();
        svc.assign_committee_seats(&com.id, &first).await.unwrap();

        // Move Ana to Relator; seat map semantics clear her old seat.
        let mut second = svc.committee_seat_map(&com.id).await.unwrap();
        second.assign(CommitteeSeatKey::Relator, ana.clone()).unwrap();
        second.assign(CommitteeSeatKey::Presidente, bruno).unwrap();
        svc.assign_committee_seats(&com.id, &second).await.unwrap();

        let loaded = svc.committee_seat_map(&com.id).await.unwrap();
        assert_eq!(loaded.occupant(CommitteeSeatKey::Relator), Some(ana.as_str()));
        assert_ne!(loaded.occupant(CommitteeSeatKey::Presidente), Some(ana.as_str()));
    }

    #[tokio::test]
    async fn seat_audit_records_roles() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Meio Ambiente", CommitteeKind::Permanente, None, 1)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;

        let mut map = SeatMap::committee(1);
        map.assign(CommitteeSeatKey::Relator, ana).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        let entries = svc
            .query_audit(&crate::repos::audit::AuditFilter {
                entity_id: Some(com.id.clone()),
                action: Some(AuditAction::SeatAssigned),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        let detail = entries[0].detail.as_ref().unwrap();
        assert_eq!(detail[0]["role"], "relator");
    }

    #[tokio::test]
    async fn clearing_a_seat_is_audited() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Justiça", CommitteeKind::Permanente, None, 1)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;

        let mut map = SeatMap::committee(1);
        map.assign(CommitteeSeatKey::Relator, ana.clone()).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        let mut map = svc.committee_seat_map(&com.id).await.unwrap();
        map.clear(CommitteeSeatKey::Relator).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        let entries = svc
            .query_audit(&crate::repos::audit::AuditFilter {
                entity_id: Some(com.id.clone()),
                action: Some(AuditAction::SeatCleared),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        let detail = entries[0].detail.as_ref().unwrap();
        assert_eq!(detail[0]["role"], "relator");
        assert_eq!(detail[0]["councilor_id"], ana);
    }

    #[tokio::test]
    async fn moving_an_occupant_does_not_clear_a_refilled_seat() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Urbanismo", CommitteeKind::Permanente, None, 1)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;
        let bruno = test_councilor(&svc, "Bruno", "MDB").await;

        let mut map = SeatMap::committee(1);
        map.assign(CommitteeSeatKey::Presidente, ana.clone()).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        // Ana moves to relator, Bruno takes presidente: no seat ends up vacant.
        let mut map = svc.committee_seat_map(&com.id).await.unwrap();
        map.assign(CommitteeSeatKey::Relator, ana).unwrap();
        map.assign(CommitteeSeatKey::Presidente, bruno).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        let entries = svc
            .query_audit(&crate::repos::audit::AuditFilter {
                entity_id: Some(com.id.clone()),
                action: Some(AuditAction::SeatCleared),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn delete_committee_cascades_seats() {
        let svc = test_service().await;
        let com = svc
            .create_committee("Transitória", CommitteeKind::Temporaria, None, 1)
            .await
            .unwrap();
        let ana = test_councilor(&svc, "Ana", "PSD").await;

        let mut map = SeatMap::committee(1);
        map.assign(CommitteeSeatKey::Presidente, ana).unwrap();
        svc.assign_committee_seats(&com.id, &map).await.unwrap();

        svc.delete_committee(&com.id).await.unwrap();
        assert!(svc.list_committee_seats(&com.id).await.unwrap().is_empty());
    }
}
