use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Agent, Intel, NewAgent, NewIntel};
use super::{AgentStore, IntelStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS agents (
    id            UUID PRIMARY KEY,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL,
    updated_at    TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS intel (
    id          UUID PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    location    TEXT NOT NULL,
    agent_id    UUID NOT NULL REFERENCES agents(id),
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL
);
"#;

/// PostgreSQL-backed store. The UNIQUE constraint on `agents.email` closes the
/// duplicate-registration race that the point-lookup check alone leaves open.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;

        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement).execute(&pool).await?;
        }

        Ok(Self { pool })
    }
}

/// Postgres unique_violation error code.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[async_trait]
impl AgentStore for PostgresStore {
    async fn insert_agent(&self, new: NewAgent) -> Result<Agent, StoreError> {
        new.validate()?;

        let now = Utc::now();
        let result = sqlx::query_as::<_, Agent>(
            "INSERT INTO agents (id, name, email, password_hash, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        result.map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateEmail
            } else {
                e.into()
            }
        })
    }

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>, StoreError> {
        let agent = sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(agent)
    }

    async fn find_agent_by_id(&self, id: Uuid) -> Result<Option<Agent>, StoreError> {
        let agent = sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(agent)
    }

    async fn list_agents(&self) -> Result<Vec<Agent>, StoreError> {
        let agents = sqlx::query_as::<_, Agent>("SELECT * FROM agents ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(agents)
    }
}

#[async_trait]
impl IntelStore for PostgresStore {
    async fn insert_intel(&self, new: NewIntel) -> Result<Intel, StoreError> {
        new.validate()?;

        let now = Utc::now();
        let record = sqlx::query_as::<_, Intel>(
            "INSERT INTO intel (id, title, description, location, agent_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.location)
        .bind(new.agent_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn find_intel_by_id(&self, id: Uuid) -> Result<Option<Intel>, StoreError> {
        let record = sqlx::query_as::<_, Intel>("SELECT * FROM intel WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn list_intel(&self) -> Result<Vec<Intel>, StoreError> {
        let records = sqlx::query_as::<_, Intel>("SELECT * FROM intel ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn list_intel_by_agent(&self, agent_id: Uuid) -> Result<Vec<Intel>, StoreError> {
        let records = sqlx::query_as::<_, Intel>(
            "SELECT * FROM intel WHERE agent_id = $1 ORDER BY created_at",
        )
        .bind(agent_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn update_intel(&self, record: &Intel) -> Result<Intel, StoreError> {
        let updated = sqlx::query_as::<_, Intel>(
            "UPDATE intel SET title = $2, description = $3, location = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.location)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_intel(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM intel WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
