use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::database::Agent;
use crate::error::ApiError;
use crate::state::AppState;

/// 401 message when no usable `Authorization: Bearer <token>` header is present.
pub const NO_TOKEN: &str = "Not authorized, no token";

/// 401 message for a present-but-unusable token. Expired, malformed and
/// bad-signature tokens all collapse to this one message so callers cannot
/// tell which check failed.
pub const TOKEN_FAILED: &str = "Not authorized, token failed";

/// The authenticated agent attached to a request, if any.
///
/// `None` means the token verified but the referenced agent no longer exists
/// in the credential store. The request still proceeds in that case (matching
/// long-standing behavior that downstream handlers depend on checking
/// themselves); any handler that needs a present agent does its own check.
#[derive(Clone, Debug)]
pub struct CurrentAgent(pub Option<Agent>);

/// Token verification middleware for protected routes.
///
/// Per request: extract the bearer token, verify it with the token service,
/// resolve the embedded agent id against the credential store, and attach the
/// result to the request for downstream handlers. Rejects with 401 on a
/// missing header or any verification failure; a verified token authorizes
/// unlimited requests until its expiry.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| ApiError::unauthorized(NO_TOKEN))?;

    let agent_id = state
        .tokens
        .verify(&token)
        .map_err(|e| {
            tracing::debug!("token verification failed: {}", e);
            ApiError::unauthorized(TOKEN_FAILED)
        })?;

    let agent = state.agents.find_agent_by_id(agent_id).await.map_err(|e| {
        tracing::error!("agent lookup failed during auth: {}", e);
        ApiError::unauthorized(TOKEN_FAILED)
    })?;

    request.extensions_mut().insert(CurrentAgent(agent));
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header. Any other
/// shape (missing header, non-Bearer scheme, empty token) yields `None` and is
/// rejected before verification is attempted.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
