use std::sync::Arc;

use vault_api::auth::TokenService;
use vault_api::config::AppConfig;
use vault_api::database::{memory::MemoryStore, postgres::PostgresStore, AgentStore, IntelStore};
use vault_api::server;
use vault_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Vault API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        panic!("JWT_SECRET must be set outside development");
    }

    let tokens = TokenService::new(&config.security.jwt_secret, config.security.token_ttl_days);

    // Postgres when a DATABASE_URL is configured, in-memory otherwise
    let state = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let store = Arc::new(
                PostgresStore::connect(&url)
                    .await
                    .unwrap_or_else(|e| panic!("failed to connect to database: {}", e)),
            );
            tracing::info!("using postgres store");
            AppState {
                agents: store.clone() as Arc<dyn AgentStore>,
                intel: store as Arc<dyn IntelStore>,
                tokens,
            }
        }
        Err(_) => {
            let store = Arc::new(MemoryStore::new());
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            AppState {
                agents: store.clone() as Arc<dyn AgentStore>,
                intel: store as Arc<dyn IntelStore>,
                tokens,
            }
        }
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Vault API listening on http://{}", bind_addr);

    axum::serve(listener, server::app(state)).await.expect("server");
}
