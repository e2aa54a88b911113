//! Token lookup and refresh de-duplication
//!
//! Concurrent requests that all receive a 401 for the same access token must
//! not each call `/auth/refresh`: the backend may rotate or revoke the
//! refresh token on use. [`RefreshGate`] lets exactly one caller refresh while
//! the others wait and then pick up the stored result.

use std::future::Future;

use calorigram_common::CredentialStore;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Stored access token. An unreadable keychain counts as signed out.
pub(crate) fn stored_access_token(credentials: &CredentialStore) -> Option<String> {
    credentials.access_token().unwrap_or_else(|error| {
        warn!(%error, "Failed to read access token");
        None
    })
}

/// Stored refresh token. An unreadable keychain counts as missing.
pub(crate) fn stored_refresh_token(credentials: &CredentialStore) -> Option<String> {
    credentials.refresh_token().unwrap_or_else(|error| {
        warn!(%error, "Failed to read refresh token");
        None
    })
}

/// Single in-flight guard around the refresh call.
#[derive(Debug, Default)]
pub struct RefreshGate {
    lock: Mutex<()>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain a replacement for `rejected`.
    ///
    /// If another caller already replaced the rejected token while this one
    /// waited, the stored token is returned without calling `refresh`.
    pub async fn replace<F, Fut>(
        &self,
        credentials: &CredentialStore,
        rejected: &str,
        refresh: F,
    ) -> Option<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<String>>,
    {
        let _guard = self.lock.lock().await;

        if let Some(current) = stored_access_token(credentials) {
            if current != rejected {
                debug!("Access token already refreshed by a concurrent request");
                return Some(current);
            }
        }

        refresh().await
    }
}
