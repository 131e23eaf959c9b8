// POST /api/v1/intel - Create a record owned by the caller
use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;

use super::required_agent;
use crate::database::{Intel, NewIntel};
use crate::error::ApiError;
use crate::middleware::CurrentAgent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntelRequest {
    pub title: String,
    pub description: String,
    pub location: String,
}

/// Create an intel record. Ownership is taken from the authenticated caller,
/// never from the request body, and is immutable afterwards.
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Json(payload): Json<CreateIntelRequest>,
) -> Result<(StatusCode, Json<Intel>), ApiError> {
    let agent = required_agent(current)?;

    let record = state
        .intel
        .insert_intel(NewIntel {
            title: payload.title,
            description: payload.description,
            location: payload.location,
            agent_id: agent.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
