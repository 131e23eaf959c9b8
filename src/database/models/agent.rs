use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::StoreError;

/// A registered agent. The secret is held only as an irreversible hash, and
/// the hash never leaves the process in a response payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for agent creation; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewAgent {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Invalid("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(StoreError::Invalid("email is required".to_string()));
        }
        if self.password_hash.is_empty() {
            return Err(StoreError::Invalid("password hash is required".to_string()));
        }
        Ok(())
    }
}
