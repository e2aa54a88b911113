//! Platform keychain provider for secure credential storage
//!
//! Thin wrapper over the platform keychain for storing secrets across macOS
//! (Keychain Access), Windows (Credential Manager), and Linux (kernel
//! keyutils). Values never touch plain configuration files.
//!
//! ## Usage
//!
//! ```no_run
//! use calorigram_common::security::{KeychainProvider, SecretStore};
//!
//! let keychain = KeychainProvider::new("com.calorigram");
//! keychain.set_secret("refresh_token", "abc")?;
//! assert_eq!(keychain.get_secret("refresh_token")?.as_deref(), Some("abc"));
//! # Ok::<(), calorigram_common::security::KeychainError>(())
//! ```

use keyring::Entry;
use tracing::debug;

use super::traits::{KeychainError, SecretStore};

/// Keychain-backed [`SecretStore`], namespaced by a service name.
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a new keychain provider for a specific service
    ///
    /// # Arguments
    /// * `service_name` - Service identifier (e.g., "com.calorigram")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    /// Service namespace used for every entry.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Create a keyring entry
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if entry creation fails
    fn create_entry(&self, account: &str) -> Result<Entry, KeychainError> {
        Entry::new(&self.service_name, account).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to create keychain entry: {e}"))
        })
    }
}

impl SecretStore for KeychainProvider {
    fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "Storing secret in keychain");

        // Delete-then-insert
        self.delete_secret(key)?;

        let entry = self.create_entry(key)?;
        entry.set_password(value).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to store secret for {key}: {e}"))
        })?;

        debug!(service = %self.service_name, key = %key, "Secret stored successfully");
        Ok(())
    }

    fn get_secret(&self, key: &str) -> Result<Option<String>, KeychainError> {
        debug!(service = %self.service_name, key = %key, "Retrieving secret from keychain");

        let entry = self.create_entry(key)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(KeychainError::AccessFailed(format!(
                "Failed to retrieve secret for {key}: {e}"
            ))),
        }
    }

    fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "Deleting secret from keychain");

        let entry = self.create_entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeychainError::AccessFailed(format!(
                "Failed to delete secret for {key}: {e}"
            ))),
        }
    }
}
