pub mod create;
pub mod list;
pub mod record;

pub use create::create;
pub use list::{list_all, list_own};
pub use record::{remove, update};

use crate::database::Agent;
use crate::error::ApiError;
use crate::middleware::CurrentAgent;

/// Response for a missing record and for an ownership mismatch alike, so a
/// caller cannot probe whether a record id exists.
pub(crate) fn not_found_or_unauthorized() -> ApiError {
    ApiError::not_found("Intel not found or unauthorized")
}

/// Unwrap the agent attached by the auth middleware.
///
/// The middleware lets a valid token through even when its agent has since
/// disappeared from the store; handlers that need the owner surface that here
/// as a server error rather than a silent success.
pub(crate) fn required_agent(current: CurrentAgent) -> Result<Agent, ApiError> {
    current.0.ok_or_else(|| {
        tracing::error!("token verified but agent record is gone");
        ApiError::internal_server_error("Server Error: authenticated agent no longer exists")
    })
}
