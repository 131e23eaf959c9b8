use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::StoreError;

/// An intel record. `agent_id` is the owning agent, set at creation from the
/// authenticated caller and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Intel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub agent_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for intel creation; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewIntel {
    pub title: String,
    pub description: String,
    pub location: String,
    pub agent_id: Uuid,
}

impl NewIntel {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Invalid("title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(StoreError::Invalid("description is required".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(StoreError::Invalid("location is required".to_string()));
        }
        Ok(())
    }
}
