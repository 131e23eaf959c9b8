use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::models::{Agent, Intel, NewAgent, NewIntel};
use super::{AgentStore, IntelStore, StoreError};

/// In-memory store backing both the credential and record collections.
/// Default backend when no `DATABASE_URL` is configured, and what the tests
/// run against.
#[derive(Default)]
pub struct MemoryStore {
    agents: RwLock<HashMap<Uuid, Agent>>,
    intel: RwLock<HashMap<Uuid, Intel>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentStore for MemoryStore {
    async fn insert_agent(&self, new: NewAgent) -> Result<Agent, StoreError> {
        new.validate()?;

        let mut agents = self.agents.write().unwrap();
        if agents.values().any(|a| a.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let agent = Agent {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        agents.insert(agent.id, agent.clone());
        Ok(agent)
    }

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>, StoreError> {
        let agents = self.agents.read().unwrap();
        Ok(agents.values().find(|a| a.email == email).cloned())
    }

    async fn find_agent_by_id(&self, id: Uuid) -> Result<Option<Agent>, StoreError> {
        let agents = self.agents.read().unwrap();
        Ok(agents.get(&id).cloned())
    }

    async fn list_agents(&self) -> Result<Vec<Agent>, StoreError> {
        let agents = self.agents.read().unwrap();
        let mut all: Vec<Agent> = agents.values().cloned().collect();
        all.sort_by_key(|a| a.created_at);
        Ok(all)
    }
}

#[async_trait]
impl IntelStore for MemoryStore {
    async fn insert_intel(&self, new: NewIntel) -> Result<Intel, StoreError> {
        new.validate()?;

        let now = Utc::now();
        let record = Intel {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            location: new.location,
            agent_id: new.agent_id,
            created_at: now,
            updated_at: now,
        };
        self.intel.write().unwrap().insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_intel_by_id(&self, id: Uuid) -> Result<Option<Intel>, StoreError> {
        let intel = self.intel.read().unwrap();
        Ok(intel.get(&id).cloned())
    }

    async fn list_intel(&self) -> Result<Vec<Intel>, StoreError> {
        let intel = self.intel.read().unwrap();
        let mut all: Vec<Intel> = intel.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    async fn list_intel_by_agent(&self, agent_id: Uuid) -> Result<Vec<Intel>, StoreError> {
        let intel = self.intel.read().unwrap();
        let mut own: Vec<Intel> = intel
            .values()
            .filter(|r| r.agent_id == agent_id)
            .cloned()
            .collect();
        own.sort_by_key(|r| r.created_at);
        Ok(own)
    }

    async fn update_intel(&self, record: &Intel) -> Result<Intel, StoreError> {
        self.intel
            .write()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete_intel(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.intel.write().unwrap().remove(&id).is_some())
    }
}
