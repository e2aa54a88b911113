//! In-memory secret stores.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::security::{KeychainError, SecretStore};

/// Map-backed [`SecretStore`]; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    storage: Mutex<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secrets.
    pub fn len(&self) -> usize {
        self.storage.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.lock().is_empty()
    }
}

impl SecretStore for MemorySecretStore {
    fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        let mut storage = self.storage.lock();
        storage.remove(key);
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_secret(&self, key: &str) -> Result<Option<String>, KeychainError> {
        Ok(self.storage.lock().get(key).cloned())
    }

    fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        self.storage.lock().remove(key);
        Ok(())
    }
}

/// Store whose every operation fails, simulating a locked keychain.
#[derive(Debug, Default)]
pub struct FailingSecretStore;

impl SecretStore for FailingSecretStore {
    fn set_secret(&self, _key: &str, _value: &str) -> Result<(), KeychainError> {
        Err(KeychainError::AccessFailed("keychain locked".into()))
    }

    fn get_secret(&self, _key: &str) -> Result<Option<String>, KeychainError> {
        Err(KeychainError::AccessFailed("keychain locked".into()))
    }

    fn delete_secret(&self, _key: &str) -> Result<(), KeychainError> {
        Err(KeychainError::AccessFailed("keychain locked".into()))
    }
}
