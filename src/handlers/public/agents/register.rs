// POST /api/v1/agents/register - Create an agent and issue a first token
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use super::AgentSession;
use crate::auth::password;
use crate::database::{NewAgent, StoreError};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub secret: String,
}

/// Register a new agent: reject a taken email, hash the secret, persist, and
/// return the identity with a bearer token.
///
/// The email point-lookup and the insert are not atomic; the store-level
/// uniqueness check backs it up where the backend has one (Postgres), and the
/// remaining window is a known limitation of the flow.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AgentSession>), ApiError> {
    if state.agents.find_agent_by_email(&payload.email).await?.is_some() {
        return Err(ApiError::bad_request("Agent already exists"));
    }

    let password_hash = password::hash_secret(&payload.secret).map_err(|e| {
        tracing::error!("secret hashing failed: {}", e);
        ApiError::bad_request("Invalid agent data")
    })?;

    let agent = state
        .agents
        .insert_agent(NewAgent {
            name: payload.name,
            email: payload.email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::bad_request("Agent already exists"),
            StoreError::Invalid(_) => ApiError::bad_request("Invalid agent data"),
            other => other.into(),
        })?;

    let token = state.tokens.issue(agent.id)?;

    tracing::info!(agent_id = %agent.id, "agent registered");

    Ok((
        StatusCode::CREATED,
        Json(AgentSession {
            id: agent.id,
            name: agent.name,
            email: agent.email,
            token,
        }),
    ))
}
