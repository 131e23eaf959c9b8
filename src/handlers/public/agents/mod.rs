pub mod list;
pub mod login;
pub mod register;

pub use list::list;
pub use login::login;
pub use register::register;

use serde::Serialize;
use uuid::Uuid;

/// Response body for successful registration and login: the agent's public
/// identity plus a freshly issued bearer token. Never carries the secret or
/// its hash.
#[derive(Debug, Serialize)]
pub struct AgentSession {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}
