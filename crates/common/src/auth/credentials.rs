//! Access/refresh token helpers layered on top of [`SecretStore`].
//!
//! The pair is written together after a successful sign-in, the access token
//! alone is replaced by a refresh, and both are cleared on logout or when a
//! refresh fails. There is no cross-key transaction: a crash between the two
//! writes of [`CredentialStore::store_tokens`] can leave only the access token.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::security::{KeychainError, SecretStore};

/// Keychain account holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "com.calorigram.accessToken";
/// Keychain account holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "com.calorigram.refreshToken";

/// Shared handle to the stored credential pair.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn SecretStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self { store }
    }

    /// Current access token, `None` when signed out.
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend cannot be read
    pub fn access_token(&self) -> Result<Option<String>, KeychainError> {
        self.store.get_secret(ACCESS_TOKEN_KEY)
    }

    /// Current refresh token.
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend cannot be read
    pub fn refresh_token(&self) -> Result<Option<String>, KeychainError> {
        self.store.get_secret(REFRESH_TOKEN_KEY)
    }

    /// Refresh token that must be present, e.g. before calling `/auth/refresh`.
    ///
    /// # Errors
    /// Returns `KeychainError::NotFound` when no refresh token is stored and
    /// `KeychainError::AccessFailed` if the backend cannot be read
    pub fn require_refresh_token(&self) -> Result<String, KeychainError> {
        self.refresh_token()?.ok_or(KeychainError::NotFound)
    }

    /// Persist a freshly issued credential pair.
    ///
    /// # Errors
    /// Returns the first backend failure; the access token may already be
    /// written when the refresh token write fails.
    pub fn store_tokens(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), KeychainError> {
        debug!("Storing credential pair");
        self.store.set_secret(ACCESS_TOKEN_KEY, access_token)?;
        self.store.set_secret(REFRESH_TOKEN_KEY, refresh_token)?;
        Ok(())
    }

    /// Replace only the access token (token refresh).
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend rejects the write
    pub fn set_access_token(&self, access_token: &str) -> Result<(), KeychainError> {
        debug!("Replacing access token");
        self.store.set_secret(ACCESS_TOKEN_KEY, access_token)
    }

    /// Delete both tokens. Both deletes are attempted even if the first fails.
    pub fn clear_all(&self) {
        debug!("Clearing credential pair");
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(error) = self.store.delete_secret(key) {
                warn!(key, %error, "Failed to delete credential");
            }
        }
    }

    /// Determine whether an access token exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.secret_exists(ACCESS_TOKEN_KEY)
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").field("authenticated", &self.is_authenticated()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemorySecretStore;

    fn credentials() -> (Arc<MemorySecretStore>, CredentialStore) {
        let store = Arc::new(MemorySecretStore::new());
        (store.clone(), CredentialStore::new(store))
    }

    #[test]
    fn require_refresh_token_reports_missing_entry() {
        let (_, creds) = credentials();
        assert!(matches!(creds.require_refresh_token(), Err(KeychainError::NotFound)));

        creds.store_tokens("access-1", "refresh-1").unwrap();
        assert_eq!(creds.require_refresh_token().unwrap(), "refresh-1");
    }

    #[test]
    fn require_refresh_token_surfaces_backend_failure() {
        let creds = CredentialStore::new(Arc::new(crate::testing::FailingSecretStore));
        assert!(matches!(creds.require_refresh_token(), Err(KeychainError::AccessFailed(_))));
    }

    #[test]
    fn store_and_read_pair() {
        let (_, creds) = credentials();

        creds.store_tokens("access-1", "refresh-1").unwrap();

        assert_eq!(creds.access_token().unwrap().as_deref(), Some("access-1"));
        assert_eq!(creds.refresh_token().unwrap().as_deref(), Some("refresh-1"));
        assert!(creds.is_authenticated());
    }

    #[test]
    fn set_access_token_keeps_refresh_token() {
        let (_, creds) = credentials();
        creds.store_tokens("old", "refresh").unwrap();

        creds.set_access_token("new").unwrap();

        assert_eq!(creds.access_token().unwrap().as_deref(), Some("new"));
        assert_eq!(creds.refresh_token().unwrap().as_deref(), Some("refresh"));
    }

    #[test]
    fn clear_all_removes_both_tokens() {
        let (store, creds) = credentials();
        creds.store_tokens("a", "r").unwrap();

        creds.clear_all();

        assert!(!creds.is_authenticated());
        assert_eq!(creds.refresh_token().unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_all_on_empty_store_is_noop() {
        let (_, creds) = credentials();
        creds.clear_all();
        creds.clear_all();
        assert!(!creds.is_authenticated());
    }
}
