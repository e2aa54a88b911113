//! Session restore on launch
//!
//! Decides, from the stored credentials and one `/profile/me` probe, whether
//! the user is signed in. Transport failures keep the tokens so the probe can
//! be retried later; every other failure signs the user out.

use std::sync::Arc;

use calorigram_domain::{ApiError, User};
use tracing::{info, instrument, warn};

use crate::ports::AuthPort;

/// Outcome of [`SessionService::restore`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No usable credentials
    SignedOut,
    /// Credentials verified against the backend
    SignedIn(User),
    /// Credentials kept but not verified (backend unreachable)
    Unverified,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

pub struct SessionService {
    auth: Arc<dyn AuthPort>,
}

impl SessionService {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    /// Restore the session from stored credentials.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> SessionState {
        if !self.auth.is_logged_in() {
            return SessionState::SignedOut;
        }

        match self.auth.current_user().await {
            Ok(user) => {
                info!(user_id = user.id, "Session restored");
                SessionState::SignedIn(user)
            }
            Err(error) if !should_force_logout(&error) => {
                warn!(%error, "Could not verify session, keeping credentials");
                SessionState::Unverified
            }
            Err(error) => {
                warn!(%error, not_found = error.is_not_found(), "Session rejected, signing out");
                self.auth.logout();
                SessionState::SignedOut
            }
        }
    }

    /// Sign out locally.
    pub fn logout(&self) {
        self.auth.logout();
    }
}

/// Only transport failures leave the stored credentials in place.
pub fn should_force_logout(error: &ApiError) -> bool {
    !matches!(error, ApiError::Network(_))
}
