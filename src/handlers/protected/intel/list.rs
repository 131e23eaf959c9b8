// GET /api/v1/intel and GET /api/v1/intel/:id - Record listings
use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};

use super::required_agent;
use crate::database::Intel;
use crate::error::ApiError;
use crate::middleware::CurrentAgent;
use crate::state::AppState;

/// Every record, regardless of owner. Reads are not ownership-gated; only
/// mutation is.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Intel>>, ApiError> {
    let records = state.intel.list_intel().await?;
    Ok(Json(records))
}

/// The caller's own records. The path segment is accepted but not consulted;
/// the listing is always scoped to the authenticated agent.
pub async fn list_own(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(_id): Path<String>,
) -> Result<Json<Vec<Intel>>, ApiError> {
    let agent = required_agent(current)?;
    let records = state.intel.list_intel_by_agent(agent.id).await?;
    Ok(Json(records))
}
