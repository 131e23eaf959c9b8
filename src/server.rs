use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{protected::intel, public::agents};
use crate::middleware::require_token;
use crate::state::AppState;

/// Assemble the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(agent_routes())
        .merge(intel_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn agent_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/agents", get(agents::list))
        .route("/api/v1/agents/register", post(agents::register))
        .route("/api/v1/agents/login", post(agents::login))
}

fn intel_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/intel", post(intel::create).get(intel::list_all))
        .route(
            "/api/v1/intel/:id",
            get(intel::list_own).put(intel::update).delete(intel::remove),
        )
        // Every intel route sits behind token verification
        .route_layer(middleware::from_fn_with_state(state, require_token))
}

async fn root() -> &'static str {
    "✅ Vault API is currently running 🚀"
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
