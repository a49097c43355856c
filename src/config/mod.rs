//! YAML configuration for planners and scenarios.

pub(crate) mod defaults;
mod error;
mod planner;
mod scenario;

pub use error::ConfigError;
pub use scenario::ScenarioConfig;
