pub mod errors;
pub mod failover;
pub mod logging;
pub mod provider;
pub mod root;

pub use errors::ConfigError;
pub use failover::FailoverConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use provider::ProviderConfig;
pub use root::{CliOverrides, Config};
