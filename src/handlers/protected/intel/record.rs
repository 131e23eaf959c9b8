// PUT /api/v1/intel/:id and DELETE /api/v1/intel/:id - Owner-gated mutation
use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use super::{not_found_or_unauthorized, required_agent};
use crate::database::Intel;
use crate::error::ApiError;
use crate::middleware::CurrentAgent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateIntelRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Fetch the record and apply the ownership check. Record ids are opaque to
/// callers, so an unparseable id, an absent record, and an owner mismatch all
/// return the identical 404. The fetch and the following mutation are two
/// steps; the window between them is a documented race, not locked.
async fn fetch_owned(state: &AppState, id: &str, agent_id: Uuid) -> Result<Intel, ApiError> {
    let id = Uuid::parse_str(id).map_err(|_| not_found_or_unauthorized())?;

    state
        .intel
        .find_intel_by_id(id)
        .await?
        .filter(|record| record.agent_id == agent_id)
        .ok_or_else(not_found_or_unauthorized)
}

/// Update a record's fields. Supplied fields overwrite, omitted fields keep
/// their prior value; the owner is never reassigned.
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateIntelRequest>,
) -> Result<Json<Intel>, ApiError> {
    let agent = required_agent(current)?;
    let mut record = fetch_owned(&state, &id, agent.id).await?;

    if let Some(title) = payload.title {
        record.title = title;
    }
    if let Some(description) = payload.description {
        record.description = description;
    }
    if let Some(location) = payload.location {
        record.location = location;
    }
    record.updated_at = Utc::now();

    let updated = state.intel.update_intel(&record).await?;
    Ok(Json(updated))
}

/// Delete a record. Repeating the call finds nothing and returns the same 404
/// as any other missing record.
pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let agent = required_agent(current)?;
    let record = fetch_owned(&state, &id, agent.id).await?;

    state.intel.delete_intel(record.id).await?;
    Ok(Json(json!({ "message": "Intel removed" })))
}
