// GET /api/v1/agents - Public directory of registered agents
use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AgentDirectory {
    pub count: usize,
    pub agents: Vec<AgentSummary>,
}

/// Public view of an agent: name and email only.
#[derive(Debug, Serialize)]
pub struct AgentSummary {
    pub name: String,
    pub email: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<AgentDirectory>, ApiError> {
    let agents = state.agents.list_agents().await?;

    let summaries: Vec<AgentSummary> = agents
        .into_iter()
        .map(|a| AgentSummary {
            name: a.name,
            email: a.email,
        })
        .collect();

    Ok(Json(AgentDirectory {
        count: summaries.len(),
        agents: summaries,
    }))
}
