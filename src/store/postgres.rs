//! PostgreSQL adapter: fixed parameterized statements over the `users` table.

use crate::config::Config;
use crate::error::AppError;
use crate::model::{User, UserPayload};
use crate::store::UserStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";
const SELECT_ALL: &str = "SELECT id, name, email FROM users";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const UPDATE: &str =
    "UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING id, name, email";
const DELETE: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

const MAX_CONNECTIONS: u32 = 5;

/// Open the shared pool against the configured database.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the `users` table if it does not exist. Run once before serving.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!(sql = %CREATE_USERS_TABLE, "bootstrap");
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    tracing::info!("users table ready");
    Ok(())
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, params = ?(id,), "query");
        let row = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, AppError> {
        tracing::debug!(sql = %INSERT, params = ?(&payload.name, &payload.email), "query");
        let row = sqlx::query_as::<_, User>(INSERT)
            .bind(&payload.name)
            .bind(&payload.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                // RETURNING always yields a row here; its absence is a server fault.
                sqlx::Error::RowNotFound => AppError::Internal("insert returned no row".into()),
                other => AppError::Db(other),
            })?;
        Ok(row)
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %UPDATE, params = ?(&payload.name, &payload.email, id), "query");
        let row = sqlx::query_as::<_, User>(UPDATE)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE, params = ?(id,), "query");
        let deleted = sqlx::query_scalar::<_, i32>(DELETE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
