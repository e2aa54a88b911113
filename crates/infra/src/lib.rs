//! # Calorigram Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - HTTP transport with transport-level retry
//! - The authenticated request pipeline with token refresh
//! - Backend services implementing `calorigram-core` ports
//! - Configuration loading and the service container
//!
//! ## Architecture
//! - Implements traits defined in `calorigram-core`
//! - Depends on `calorigram-domain`, `calorigram-common` and `calorigram-core`
//! - Contains all "impure" code (network, files, keychain wiring)

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod services;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiRequest};
pub use context::ServiceContainer;
pub use errors::InfraError;
pub use http::HttpClient;
pub use services::{
    AnalysisService, AuthService, MealsService, ProfileService, StatisticsService,
    SubscriptionService,
};
