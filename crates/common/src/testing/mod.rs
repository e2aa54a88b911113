//! Testing utilities
//!
//! - **[`mocks`]**: in-memory [`SecretStore`](crate::security::SecretStore)
//!   implementations

pub mod mocks;

pub use mocks::{FailingSecretStore, MemorySecretStore};
