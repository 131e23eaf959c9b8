#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vault_api::auth::TokenService;
use vault_api::database::memory::MemoryStore;
use vault_api::database::{AgentStore, IntelStore};
use vault_api::server;
use vault_api::state::AppState;

pub const TEST_SECRET: &str = "test-jwt-secret-key";

/// Fresh app over an empty in-memory store and a fixed signing secret.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        agents: store.clone() as Arc<dyn AgentStore>,
        intel: store as Arc<dyn IntelStore>,
        tokens: token_service(),
    };
    server::app(state)
}

/// A token service sharing the app's secret, for crafting tokens in tests.
pub fn token_service() -> TokenService {
    TokenService::new(TEST_SECRET, 30)
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    Ok((status, value))
}

/// Register an agent and return the session body ({id, name, email, token}).
pub async fn register(app: &Router, name: &str, email: &str, secret: &str) -> Result<Value> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/agents/register",
        None,
        Some(json!({ "name": name, "email": email, "secret": secret })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "register failed: {} {}", status, body);
    Ok(body)
}

/// Create an intel record with the given token and return it.
pub async fn create_intel(
    app: &Router,
    token: &str,
    title: &str,
    description: &str,
    location: &str,
) -> Result<Value> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/intel",
        Some(token),
        Some(json!({ "title": title, "description": description, "location": location })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "create failed: {} {}", status, body);
    Ok(body)
}
