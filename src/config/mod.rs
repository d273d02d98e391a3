mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CacheConfig, Config, DetailsConfig, DetailsMode, LoggingConfig};
