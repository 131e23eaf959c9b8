pub mod auth;

pub use auth::{require_token, CurrentAgent, NO_TOKEN, TOKEN_FAILED};
