//! Admin session: the bearer token used for authenticated requests.

use std::sync::{Arc, RwLock};

/// Holds the admin access token.
///
/// Clones share the same token, so a login performed through one clone of
/// the client is visible to every other clone.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    token: Arc<RwLock<Option<String>>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a token obtained elsewhere (config, environment).
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Store a token. Blank tokens clear the session instead.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut slot = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
    }

    pub fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
