//! Modular common utilities shared across Calorigram crates.
//!
//! # Feature Tiers
//!
//! - `platform` (default): OS keyring backed [`security::KeychainProvider`]
//! - `test-utils`: in-memory secret stores under [`testing`]

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod observability;
pub mod security;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::CredentialStore;
#[cfg(feature = "platform")]
pub use security::KeychainProvider;
pub use security::{KeychainError, SecretStore};
