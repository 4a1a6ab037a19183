//! Portal user repository — invitation lifecycle.
//!
//! Accounts are created by invitation. The invite token is stored until the
//! invitee presents it; activation consumes it. Deactivation is final.
//! Token delivery (email) is out of scope here.

use chrono::Utc;

use plenario_core::entities::User;
use plenario_core::enums::{AuditAction, EntityType, UserStatus};
use plenario_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::service::ChamberService;

const SELECT_COLS: &str =
    "id, email, name, status, invite_token, invited_at, activated_at, deactivated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        invite_token: get_opt_string(row, 4)?,
        invited_at: parse_datetime(&row.get::<String>(5)?)?,
        activated_at: parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
        deactivated_at: parse_optional_datetime(get_opt_string(row, 7)?.as_deref())?,
    })
}

impl ChamberService {
    /// Invite a user by email. Returns the account with its invite token;
    /// the caller is responsible for delivering the token.
    pub async fn invite_user(&self, email: &str, name: &str) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        let token = self.db().generate_token().await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO users ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL)"
                ),
                libsql::params![
                    id.as_str(),
                    email,
                    name,
                    UserStatus::Invited.as_str(),
                    token.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let user = User {
            id: id.clone(),
            email: email.to_string(),
            name: name.to_string(),
            status: UserStatus::Invited,
            invite_token: Some(token),
            invited_at: now,
            activated_at: None,
            deactivated_at: None,
        };

        self.audit(EntityType::User, &id, AuditAction::Invited, None)
            .await?;

        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1"),
                [email],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY invited_at DESC LIMIT {limit}"),
                (),
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Activate an invited account by presenting its invite token.
    ///
    /// The token is consumed: cleared on success, useless afterwards.
    pub async fn activate_user(&self, user_id: &str, token: &str) -> Result<User, DatabaseError> {
        let current = self.get_user(user_id).await?;

        if !current.status.can_transition_to(UserStatus::Active) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot activate user {} in status {}",
                user_id, current.status
            )));
        }
        if current.invite_token.as_deref() != Some(token) {
            return Err(DatabaseError::InvalidState(format!(
                "Invite token mismatch for user {user_id}"
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE users SET status = ?1, invite_token = NULL, activated_at = ?2 WHERE id = ?3",
                libsql::params![UserStatus::Active.as_str(), now.to_rfc3339(), user_id],
            )
            .await?;

        self.audit(EntityType::User, user_id, AuditAction::Activated, None)
            .await?;

        Ok(User {
            status: UserStatus::Active,
            invite_token: None,
            activated_at: Some(now),
            ..current
        })
    }

    /// Deactivate an account. Final; there is no reactivation path.
    pub async fn deactivate_user(&self, user_id: &str) -> Result<User, DatabaseError> {
        let current = self.get_user(user_id).await?;

        if !current.status.can_transition_to(UserStatus::Deactivated) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot deactivate user {} in status {}",
                user_id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE users SET status = ?1, invite_token = NULL, deactivated_at = ?2 WHERE id = ?3",
                libsql::params![UserStatus::Deactivated.as_str(), now.to_rfc3339(), user_id],
            )
            .await?;

        self.audit(EntityType::User, user_id, AuditAction::Deactivated, None)
            .await?;

        Ok(User {
            status: UserStatus::Deactivated,
            invite_token: None,
            deactivated_at: Some(now),
            ..current
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn invite_creates_pending_account() {
        let svc = test_service().await;

        let user = svc
            .invite_user("secretaria@camara.gov.br", "Secretaria Legislativa")
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.status, UserStatus::Invited);
        let token = user.invite_token.unwrap();
        assert_eq!(token.len(), 32);
        assert_eq!(user.activated_at, None);
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let svc = test_service().await;
        svc.invite_user("a@camara.gov.br", "A").await.unwrap();
        assert!(svc.invite_user("a@camara.gov.br", "A de novo").await.is_err());
    }

    #[tokio::test]
    async fn activation_consumes_token() {
        let svc = test_service().await;
        let user = svc.invite_user("b@camara.gov.br", "B").await.unwrap();
        let token = user.invite_token.clone().unwrap();

        let active = svc.activate_user(&user.id, &token).await.unwrap();
        assert_eq!(active.status, UserStatus::Active);
        assert_eq!(active.invite_token, None);
        assert!(active.activated_at.is_some());

        // Token is gone; a second activation fails on status.
        assert!(matches!(
            svc.activate_user(&user.id, &token).await,
            Err(DatabaseError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn activation_rejects_wrong_token() {
        let svc = test_service().await;
        let user = svc.invite_user("c@camara.gov.br", "C").await.unwrap();

        let result = svc.activate_user(&user.id, "0000deadbeef").await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));

        let still = svc.get_user(&user.id).await.unwrap();
        assert_eq!(still.status, UserStatus::Invited);
    }

    #[tokio::test]
    async fn deactivation_is_final() {
        let svc = test_service().await;
        let user = svc.invite_user("d@camara.gov.br", "D").await.unwrap();
        let token = user.invite_token.clone().unwrap();
        svc.activate_user(&user.id, &token).await.unwrap();

        let gone = svc.deactivate_user(&user.id).await.unwrap();
        assert_eq!(gone.status, UserStatus::Deactivated);

        // No path back to active.
        assert!(matches!(
            svc.activate_user(&user.id, &token).await,
            Err(DatabaseError::InvalidState(_))
        ));
        assert!(matches!(
            svc.deactivate_user(&user.id).await,
            Err(DatabaseError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn pending_invite_can_be_revoked() {
        let svc = test_service().await;
        let user = svc.invite_user("e@camara.gov.br", "E").await.unwrap();

        // Invited -> deactivated revokes the invitation.
        let revoked = svc.deactivate_user(&user.id).await.unwrap();
        assert_eq!(revoked.status, UserStatus::Deactivated);
        assert_eq!(revoked.invite_token, None);
    }

    #[tokio::test]
    async fn lookup_by_email() {
        let svc = test_service().await;
        let user = svc.invite_user("f@camara.gov.br", "F").await.unwrap();

        let found = svc.get_user_by_email("f@camara.gov.br").await.unwrap();
        assert_eq!(found.id, user.id);
    }
}
