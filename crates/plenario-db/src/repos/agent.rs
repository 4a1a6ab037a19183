//! Agent repository — CRUD for public agents (servidores).

use chrono::Utc;

use plenario_core::cpf;
use plenario_core::entities::Agent;
use plenario_core::enums::{AuditAction, EntityType};
use plenario_core::ids::PREFIX_AGENT;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, parse_datetime};
use crate::service::ChamberService;
use crate::updates::agent::AgentUpdate;

const SELECT_COLS: &str =
    "id, name, cpf, email, phone, position, active, created_at, updated_at";

fn row_to_agent(row: &libsql::Row) -> Result<Agent, DatabaseError> {
    Ok(Agent {
        id: row.get(0)?,
        name: row.get(1)?,
        cpf: row.get(2)?,
        email: get_opt_string(row, 3)?,
        phone: get_opt_string(row, 4)?,
        position: get_opt_string(row, 5)?,
        active: get_bool(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ChamberService {
    /// Register a public agent. The CPF is validated and stored in canonical
    /// punctuated form.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid CPF, or a query
    /// error if the INSERT fails (duplicate CPF included).
    pub async fn create_agent(
        &self,
        name: &str,
        raw_cpf: &str,
        email: Option<&str>,
        phone: Option<&str>,
        position: Option<&str>,
    ) -> Result<Agent, DatabaseError> {
        let canonical_cpf = cpf::format(raw_cpf)?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_AGENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO agents ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    name,
                    canonical_cpf.as_str(),
                    email,
                    phone,
                    position,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let agent = Agent {
            id: id.clone(),
            name: name.to_string(),
            cpf: canonical_cpf,
            email: email.map(String::from),
            phone: phone.map(String::from),
            position: position.map(String::from),
            active: true,
            created_at: now,
            updated_at: now,
        };

        self.audit(EntityType::Agent, &id, AuditAction::Created, None)
            .await?;

        Ok(agent)
    }

    pub async fn get_agent(&self, id: &str) -> Result<Agent, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM agents WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_agent(&row)
    }

    pub async fn list_agents(&self, limit: u32) -> Result<Vec<Agent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM agents ORDER BY active DESC, name LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut agents = Vec::new();
        while let Some(row) = rows.next().await? {
            agents.push(row_to_agent(&row)?);
        }
        Ok(agents)
    }

    pub async fn update_agent(
        &self,
        agent_id: &str,
        update: AgentUpdate,
    ) -> Result<Agent, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(email.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref phone) = update.phone {
            sets.push(format!("phone = ?{idx}"));
            params.push(phone.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref position) = update.position {
            sets.push(format!("position = ?{idx}"));
            params.push(position.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(active) = update.active {
            sets.push(format!("active = ?{idx}"));
            params.push(i64::from(active).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_agent(agent_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(agent_id.into());
        let sql = format!("UPDATE agents SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_agent(agent_id).await?;

        self.audit(
            EntityType::Agent,
            agent_id,
            AuditAction::Updated,
            Some(serde_json::to_value(&update).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    pub async fn delete_agent(&self, agent_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM agents WHERE id = ?1", [agent_id])
            .await?;

        self.audit(EntityType::Agent, agent_id, AuditAction::Deleted, None)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::agent::AgentUpdateBuilder;

    #[tokio::test]
    async fn create_agent_roundtrip() {
        let svc = test_service().await;

        let agent = svc
            .create_agent(
                "Maria Silva",
                "52998224725",
                Some("maria@camara.gov.br"),
                None,
                Some("Diretora Legislativa"),
            )
            .await
            .unwrap();

        assert!(agent.id.starts_with("agt-"));
        assert_eq!(agent.cpf, "529.982.247-25", "CPF should be canonical");
        assert!(agent.active);

        let fetched = svc.get_agent(&agent.id).await.unwrap();
        assert_eq!(fetched.name, "Maria Silva");
        assert_eq!(fetched.position.as_deref(), Some("Diretora Legislativa"));
    }

    #[tokio::test]
    async fn create_agent_rejects_invalid_cpf() {
        let svc = test_service().await;

        let result = svc
            .create_agent("Fulano", "111.111.111-11", None, None, None)
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn create_agent_rejects_duplicate_cpf() {
        let svc = test_service().await;

        svc.create_agent("Maria", "529.982.247-25", None, None, None)
            .await
            .unwrap();
        let dup = svc
            .create_agent("Outra Maria", "529.982.247-25", None, None, None)
            .await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn update_agent_partial() {
        let svc = test_service().await;

        let agent = svc
            .create_agent("José", "123.456.789-09", None, None, None)
            .await
            .unwrap();

        let update = AgentUpdateBuilder::new()
            .phone(Some("(75) 99999-0000".into()))
            .active(false)
            .build();
        let updated = svc.update_agent(&agent.id, update).await.unwrap();
        assert_eq!(updated.phone.as_deref(), Some("(75) 99999-0000"));
        assert!(!updated.active);
        assert_eq!(updated.name, "José", "untouched fields survive");
    }

    #[tokio::test]
    async fn delete_agent() {
        let svc = test_service().await;

        let agent = svc
            .create_agent("Temporário", "111.444.777-35", None, None, None)
            .await
            .unwrap();

        svc.delete_agent(&agent.id).await.unwrap();
        let result = svc.get_agent(&agent.id).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }
}
