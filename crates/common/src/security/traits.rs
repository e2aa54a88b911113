//! Secret storage abstraction
//!
//! Keeps credential persistence behind a small synchronous trait so the
//! request pipeline can run against the OS keychain in production and an
//! in-memory map in tests.

use thiserror::Error;

/// Durable, opaque key → string storage.
///
/// Implementations guarantee atomicity for a single key only. Callers that
/// touch several keys (the credential pair) get no cross-key ordering.
pub trait SecretStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend rejects the write
    fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError>;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key was never set or has been deleted.
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend cannot be read
    fn get_secret(&self, key: &str) -> Result<Option<String>, KeychainError>;

    /// Delete the value stored under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if the backend rejects the delete
    fn delete_secret(&self, key: &str) -> Result<(), KeychainError>;

    /// Check if a secret exists
    fn secret_exists(&self, key: &str) -> bool {
        matches!(self.get_secret(key), Ok(Some(_)))
    }
}

/// Keychain error types
#[derive(Debug, Error)]
pub enum KeychainError {
    /// Keychain access failed (permission denied, not available, etc.)
    #[error("Keychain access failed: {0}")]
    AccessFailed(String),

    /// Entry not found in keychain
    #[error("Entry not found")]
    NotFound,
}
