//! Configuration sources and the provider configuration factory

mod env;
mod factory;
mod file;
mod memory;
mod traits;

pub use env::EnvConfigSource;
pub use factory::{
    resolve_provider_settings, resolve_tool_server_credentials, ACTIVE_PROVIDER_KEY,
};
pub use file::FileConfigSource;
pub use memory::MemoryConfigSource;
pub use traits::{ConfigError, ConfigResult, ConfigSource};
