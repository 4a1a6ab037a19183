//! Councilor repository — CRUD for elected council members (vereadores).

use chrono::Utc;

use plenario_core::cpf;
use plenario_core::entities::Councilor;
use plenario_core::enums::{AuditAction, EntityType};
use plenario_core::ids::PREFIX_COUNCILOR;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, parse_datetime};
use crate::service::ChamberService;
use crate::updates::councilor::CouncilorUpdate;

const SELECT_COLS: &str =
    "id, name, nickname, party, cpf, email, active, created_at, updated_at";

fn row_to_councilor(row: &libsql::Row) -> Result<Councilor, DatabaseError> {
    Ok(Councilor {
        id: row.get(0)?,
        name: row.get(1)?,
        nickname: get_opt_string(row, 2)?,
        party: row.get(3)?,
        cpf: get_opt_string(row, 4)?,
        email: get_opt_string(row, 5)?,
        active: get_bool(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ChamberService {
    /// Register a councilor. The CPF is optional; when present it is
    /// validated and stored in canonical punctuated form.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid CPF, or a query
    /// error if the INSERT fails.
    pub async fn create_councilor(
        &self,
        name: &str,
        nickname: Option<&str>,
        party: &str,
        raw_cpf: Option<&str>,
        email: Option<&str>,
    ) -> Result<Councilor, DatabaseError> {
        let canonical_cpf = match raw_cpf {
            Some(raw) => Some(cpf::format(raw)?),
            None => None,
        };
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COUNCILOR).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO councilors ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    name,
                    nickname,
                    party,
                    canonical_cpf.as_deref(),
                    email,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let councilor = Councilor {
            id: id.clone(),
            name: name.to_string(),
            nickname: nickname.map(String::from),
            party: party.to_string(),
            cpf: canonical_cpf,
            email: email.map(String::from),
            active: true,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Councilor, &id, AuditAction::Created, None)
            .await?;

        Ok(councilor)
    }

    pub async fn get_councilor(&self, id: &str) -> Result<Councilor, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM councilors WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_councilor(&row)
    }

    pub async fn list_councilors(&self, limit: u32) -> Result<Vec<Councilor>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM councilors ORDER BY active DESC, name LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut councilors = Vec::new();
        while let Some(row) = rows.next().await? {
            councilors.push(row_to_councilor(&row)?);
        }
        Ok(councilors)
    }

    pub async fn update_councilor(
        &self,
        councilor_id: &str,
        update: CouncilorUpdate,
    ) -> Result<Councilor, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref nickname) = update.nickname {
            sets.push(format!("nickname = ?{idx}"));
            params.push(nickname.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref party) = update.party {
            sets.push(format!("party = ?{idx}"));
            params.push(party.clone().into());
            idx += 1;
        }
        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(email.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(active) = update.active {
            sets.push(format!("active = ?{idx}"));
            params.push(i64::from(active).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_councilor(councilor_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(councilor_id.into());
        let sql = format!("UPDATE councilors SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_councilor(councilor_id).await?;

        self.audit(
            EntityType::Councilor,
            councilor_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Delete a councilor. Fails while the councilor still holds a seat
    /// (foreign keys on the seat tables).
    pub async fn delete_councilor(&self, councilor_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM councilors WHERE id = ?1", [councilor_id])
            .await?;

        self.audit(EntityType::Councilor, councilor_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::councilor::CouncilorUpdateBuilder;

    #[tokio::test]
    async fn create_councilor_roundtrip() {
        let svc = test_service().await;

        let ver = svc
            .create_councilor(
                "Antônio Carlos Pereira",
                Some("Toninho"),
                "PSD",
                Some("52998224725"),
                None,
            )
            .await
            .unwrap();

        assert!(ver.id.starts_with("ver-"));
        assert_eq!(ver.nickname.as_deref(), Some("Toninho"));
        assert_eq!(ver.cpf.as_deref(), Some("529.982.247-25"));

        let fetched = svc.get_councilor(&ver.id).await.unwrap();
        assert_eq!(fetched.party, "PSD");
    }

    #[tokio::test]
    async fn create_councilor_without_cpf() {
        let svc = test_service().await;
        let ver = svc
            .create_councilor("Sem CPF", None, "MDB", None, None)
            .await
            .unwrap();
        assert_eq!(ver.cpf, None);
    }

    #[tokio::test]
    async fn create_councilor_rejects_bad_cpf() {
        let svc = test_service().await;
        let result = svc
            .create_councilor("Errado", None, "PT", Some("123.456.789-00"), None)
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn update_councilor_clears_nickname() {
        let svc = test_service().await;
        let ver = svc
            .create_councilor("Ana", Some("Aninha"), "PSD", None, None)
            .await
            .unwrap();

        let update = CouncilorUpdateBuilder::new().nickname(None).build();
        let updated = svc.update_councilor(&ver.id, update).await.unwrap();
        assert_eq!(updated.nickname, None);
    }

    #[tokio::test]
    async fn list_councilors_active_first() {
        let svc = test_service().await;
        let a = svc
            .create_councilor("Zuleica", None, "PSD", None, None)
            .await
            .unwrap();
        svc.create_councilor("Bruno", None, "MDB", None, None)
            .await
            .unwrap();

        let update = CouncilorUpdateBuilder::new().active(false).build();
        svc.update_councilor(&a.id, update).await.unwrap();

        let list = svc.list_councilors(10).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Bruno", "active councilors come first");
    }

    #[tokio::test]
    async fn delete_councilor() {
        let svc = test_service().await;
        let ver = svc
            .create_councilor("Passageiro", None, "PT", None, None)
            .await
            .unwrap();

        svc.delete_councilor(&ver.id).await.unwrap();
        assert!(matches!(
            svc.get_councilor(&ver.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
