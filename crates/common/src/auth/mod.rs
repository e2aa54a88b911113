//! Credential pair storage
//!
//! Token-specific helpers layered on top of a [`SecretStore`]:
//!
//! - **`security`**: generic secret storage (keychain or in-memory)
//! - **`auth`** (this module): access/refresh token helpers used by the
//!   request pipeline and the auth service
//!
//! [`SecretStore`]: crate::security::SecretStore

pub mod credentials;

pub use credentials::{CredentialStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
