//! Identity gate: one shared secret, one `authenticated` flag per session.
//!
//! A `Session` is created per invocation and handed to every page handler;
//! there is no process-wide login state.

use crate::errors::{AppError, AppResult};
use log::{debug, warn};

#[derive(Debug, Default, Clone)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare `input` against the shared secret. On failure the session is
    /// left as it was.
    pub fn login(&mut self, input: &str, secret: &str) -> AppResult<()> {
        if secret.is_empty() {
            return Err(AppError::NoPasswordConfigured);
        }
        if input != secret {
            warn!("login refused");
            return Err(AppError::AuthFailed);
        }
        debug!("login accepted");
        self.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn require_login(&self) -> AppResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }
}
