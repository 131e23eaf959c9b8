use std::sync::Arc;

use crate::auth::TokenService;
use crate::database::{AgentStore, IntelStore};

/// Shared application state: the two store handles and the token service.
/// Constructed once in `main` (or per test) and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub agents: Arc<dyn AgentStore>,
    pub intel: Arc<dyn IntelStore>,
    pub tokens: TokenService,
}
