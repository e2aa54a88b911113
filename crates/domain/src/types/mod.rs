//! Wire records mirroring the backend JSON
//!
//! Field names already match the snake_case wire format, so no renaming is
//! needed. Optional request fields are skipped when absent.

pub mod analysis;
pub mod auth;
pub mod meal;
pub mod stats;
pub mod subscription;
pub mod user;

use serde::{Deserialize, Serialize};

pub use analysis::{AnalysisResponse, AnalysisResult, PhotoUpload, TextAnalysisRequest};
pub use auth::{
    AppleLoginRequest, AuthResponse, LoginRequest, PhoneSendCodeRequest, PhoneSendCodeResponse,
    PhoneVerifyRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
};
pub use meal::{Meal, MealCreate, MealsResponse};
pub use stats::{DayStats, Macros, TodayStats, WeekStats};
pub use subscription::{Subscription, SubscriptionFeatures};
pub use user::{CalculationResponse, ProfileCalculation, ProfileUpdate, User};

/// Generic `{ok, error}` envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
