//! Backend service implementations.
//!
//! Each service is a fixed-endpoint wrapper over [`ApiClient`] and implements
//! the matching port from `calorigram-core`.
//!
//! [`ApiClient`]: crate::api::ApiClient

pub mod analysis_service;
pub mod auth_service;
pub mod meals_service;
pub mod profile_service;
pub mod statistics_service;
pub mod subscription_service;

pub use analysis_service::AnalysisService;
pub use auth_service::AuthService;
pub use meals_service::MealsService;
pub use profile_service::ProfileService;
pub use statistics_service::StatisticsService;
pub use subscription_service::SubscriptionService;
