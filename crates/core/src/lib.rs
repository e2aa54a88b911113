//! # Calorigram Core
//!
//! Pure client-side logic - no HTTP, no keychain.
//!
//! This crate contains:
//! - Port interfaces (traits) for every backend service
//! - Session restore policy
//! - Diary aggregation (grouping, totals, remaining calories)
//!
//! ## Architecture Principles
//! - Only depends on `calorigram-domain`
//! - All remote access goes through the ports in [`ports`]
//! - Implementations live in `calorigram-infra`

pub mod diary;
pub mod ports;
pub mod session;

pub use diary::{group_by_meal_type, remaining_calories, totals, DiaryTotals, MealGroup};
pub use ports::{AnalysisPort, AuthPort, MealsPort, ProfilePort, StatisticsPort, SubscriptionPort};
pub use session::{SessionService, SessionState};
