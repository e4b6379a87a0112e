//! Configuration for the invite-network resolver.

use serde::Deserialize;

use crate::resolve::DEFAULT_MAX_DEPTH;

/// Loaded from `leet.toml` `[network]` section or `LEET__NETWORK__*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Hop bound used when a request does not name one.
    #[serde(default = "default_depth")]
    pub default_depth: usize,
}

fn default_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_depth: default_depth(),
        }
    }
}
