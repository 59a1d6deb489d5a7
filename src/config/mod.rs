//! Configuration loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FetchConfig, StoreConfig, DEFAULT_ENDPOINT};
