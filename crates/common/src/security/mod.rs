//! Secure credential storage
//!
//! - [`traits`]: the [`SecretStore`] capability every backend implements
//! - [`keychain`]: platform keychain backend (feature `platform`)

#[cfg(feature = "platform")]
pub mod keychain;
pub mod traits;

#[cfg(feature = "platform")]
pub use keychain::KeychainProvider;
pub use traits::{KeychainError, SecretStore};
