// POST /api/v1/agents/login - Authenticate an agent and issue a token
use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::AgentSession;
use crate::auth::password;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub secret: String,
}

/// Authenticate by email and secret.
///
/// Unknown email and wrong secret take the same rejection path, so the two
/// cases return identical status and body and a caller cannot probe which
/// factor was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AgentSession>, ApiError> {
    let agent = state.agents.find_agent_by_email(&payload.email).await?;

    let agent = match agent {
        Some(a) if password::verify_secret(&a.password_hash, &payload.secret) => a,
        _ => return Err(ApiError::unauthorized("Invalid credentials")),
    };

    let token = state.tokens.issue(agent.id)?;

    Ok(Json(AgentSession {
        id: agent.id,
        name: agent.name,
        email: agent.email,
        token,
    }))
}
