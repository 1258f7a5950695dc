pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{
    Config, ConfigMetadata, ConfigWarning, ConfigWarnings, CorsConfig,
    LoggingConfig, ServerConfig,
};
pub use sources::{EnvConfig, FileConfig};
