//! # Calorigram Domain
//!
//! Wire records and shared vocabulary for the Calorigram client.
//!
//! This crate contains:
//! - Request/response records mirroring the backend JSON
//! - The closed API error taxonomy and its classification helpers
//! - Endpoint constants and client defaults
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Calorigram crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
