//! Configuration: TOML file under the user config dir, overridable from the CLI.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServiceConfig, UiConfig};
