//! Port interfaces for the Calorigram backend
//!
//! These traits define the boundary between client logic and the HTTP
//! implementations in `calorigram-infra`. Every method maps to exactly one
//! backend endpoint except the local credential helpers on [`AuthPort`].

use async_trait::async_trait;
use calorigram_domain::{
    AnalysisResponse, AppleLoginRequest, AuthResponse, CalculationResponse, LoginRequest, Meal,
    MealCreate, PhoneVerifyRequest, PhotoUpload, ProfileCalculation, ProfileUpdate,
    RegisterRequest, Result, StatusResponse, Subscription, TodayStats, User, WeekStats,
};

/// Sign-in flows and the locally stored session
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Create an account; the returned credential pair is persisted.
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;

    /// Email/password sign-in; the returned credential pair is persisted.
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// Ask the backend to text a one-time code. Returns the server's
    /// `success` flag.
    async fn send_phone_code(&self, phone_number: &str) -> Result<bool>;

    /// Exchange a one-time code for a credential pair.
    async fn verify_phone_code(&self, request: PhoneVerifyRequest) -> Result<AuthResponse>;

    /// Exchange a completed Sign in with Apple credential.
    async fn login_with_apple(&self, request: AppleLoginRequest) -> Result<AuthResponse>;

    /// Profile of the signed-in user.
    async fn current_user(&self) -> Result<User>;

    /// Forget the stored credential pair. Local only.
    fn logout(&self);

    /// Whether an access token is stored.
    fn is_logged_in(&self) -> bool;

    /// Stored access token, if any.
    fn access_token(&self) -> Option<String>;
}

#[async_trait]
pub trait ProfilePort: Send + Sync {
    async fn me(&self) -> Result<User>;

    async fn update(&self, update: ProfileUpdate) -> Result<StatusResponse>;

    /// Let the backend derive calorie and macro targets.
    async fn calculate(&self, calculation: ProfileCalculation) -> Result<CalculationResponse>;
}

/// Today's meal diary
#[async_trait]
pub trait MealsPort: Send + Sync {
    /// Meals logged today, in server order.
    async fn today(&self) -> Result<Vec<Meal>>;

    async fn add(&self, meal: MealCreate) -> Result<StatusResponse>;

    async fn delete(&self, id: i64) -> Result<StatusResponse>;
}

#[async_trait]
pub trait StatisticsPort: Send + Sync {
    async fn today(&self) -> Result<TodayStats>;

    async fn week(&self) -> Result<WeekStats>;

    async fn yesterday(&self) -> Result<TodayStats>;
}

/// Nutrition estimates from a description or a photo
#[async_trait]
pub trait AnalysisPort: Send + Sync {
    async fn analyze_text(&self, description: &str) -> Result<AnalysisResponse>;

    async fn analyze_photo(&self, photo: PhotoUpload) -> Result<AnalysisResponse>;
}

#[async_trait]
pub trait SubscriptionPort: Send + Sync {
    async fn status(&self) -> Result<Subscription>;
}
