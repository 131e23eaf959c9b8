pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use models::{Agent, Intel, NewAgent, NewIntel};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Email uniqueness violated on agent creation. Surfaced distinctly from
    /// other creation failures so registration can report it as a conflict.
    #[error("duplicate email")]
    DuplicateEmail,

    /// The store rejected the record (missing required fields).
    #[error("invalid record data: {0}")]
    Invalid(String),

    /// Unexpected backend failure.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Credential store: agent identities keyed by id, with email as the unique
/// login key.
#[async_trait]
pub trait AgentStore: Send + Sync {
    /// Persist a new agent. Fails with [`StoreError::DuplicateEmail`] if the
    /// email is already taken, [`StoreError::Invalid`] on validation failure.
    async fn insert_agent(&self, new: NewAgent) -> Result<Agent, StoreError>;

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>, StoreError>;

    async fn find_agent_by_id(&self, id: Uuid) -> Result<Option<Agent>, StoreError>;

    async fn list_agents(&self) -> Result<Vec<Agent>, StoreError>;
}

/// Record store: intel records tagged with their owning agent.
#[async_trait]
pub trait IntelStore: Send + Sync {
    async fn insert_intel(&self, new: NewIntel) -> Result<Intel, StoreError>;

    async fn find_intel_by_id(&self, id: Uuid) -> Result<Option<Intel>, StoreError>;

    async fn list_intel(&self) -> Result<Vec<Intel>, StoreError>;

    async fn list_intel_by_agent(&self, agent_id: Uuid) -> Result<Vec<Intel>, StoreError>;

    /// Overwrite a record in place. The caller has already fetched the record
    /// and applied the ownership check; the fetch-then-write window is a known
    /// race, not guarded here.
    async fn update_intel(&self, record: &Intel) -> Result<Intel, StoreError>;

    /// Remove a record. Returns whether anything was deleted.
    async fn delete_intel(&self, id: Uuid) -> Result<bool, StoreError>;
}
