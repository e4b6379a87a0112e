//! Configuration management for Leet services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`LEET__SECTION__KEY`)
//! 2. Config file (`leet.toml`)
//! 3. Defaults declared on each section struct

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Build a layered configuration from an optional file and the environment.
///
/// The file is looked up as `<file_prefix>.{toml,json,yaml,...}` and may be absent.
pub fn load_layered(file_prefix: &str, env_prefix: &str) -> Result<config::Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(cfg)
}

/// Deserialize one named section, falling back to its defaults when absent.
///
/// A section that is present but malformed is still an error.
pub fn section<T>(cfg: &config::Config, name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match cfg.get::<T>(name) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => {
            tracing::debug!(section = name, "Config section absent, using defaults");
            Ok(T::default())
        }
        Err(e) => Err(e.into()),
    }
}
