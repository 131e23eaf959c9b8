pub mod agent;
pub mod intel;

pub use agent::{Agent, NewAgent};
pub use intel::{Intel, NewIntel};
