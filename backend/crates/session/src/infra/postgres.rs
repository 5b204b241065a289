//! PostgreSQL Session Store

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::SessionResult;

/// PostgreSQL-backed session store
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionStore for PgSessionStore {
    async fn insert(&self, session: &Session) -> SessionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                refresh_token,
                email,
                expires_at,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(&session.refresh_token)
        .bind(session.email.as_str())
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, session_id: &str) -> SessionResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                refresh_token,
                email,
                expires_at,
                created_at,
                rotated_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    /// Compare-and-swap rotation: a single conditional UPDATE so two
    /// refresh calls racing on the same session can never both succeed.
    async fn replace_if_matches(
        &self,
        session_id: &str,
        old_token: &str,
        new_token: &str,
        new_expires_at: DateTime<Utc>,
    ) -> SessionResult<bool> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE sessions
            SET refresh_token = $3,
                expires_at = $4,
                rotated_at = now()
            WHERE session_id = $1
              AND refresh_token = $2
            "#,
        )
        .bind(session_id)
        .bind(old_token)
        .bind(new_token)
        .bind(new_expires_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected == 1)
    }

    async fn remove(&self, session_id: &str) -> SessionResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn purge_expired(&self) -> SessionResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at < now()")
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Purged expired sessions");

        Ok(deleted)
    }
}

/// Database row mapping
#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: String,
    user_id: Uuid,
    refresh_token: String,
    email: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    rotated_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            refresh_token: self.refresh_token,
            email: Email::from_db(self.email),
            expires_at: self.expires_at,
            created_at: self.created_at,
            rotated_at: self.rotated_at,
        }
    }
}
