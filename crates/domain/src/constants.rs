//! Application constants
//!
//! Centralized location for endpoint paths and client defaults.

/// Production API origin including the `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "https://calorigramback-production.up.railway.app/api";

/// Attempts per logical call (initial try included).
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// First backoff delay; doubles after every failed attempt.
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Keychain service namespace for the credential pair.
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "com.calorigram";

/// Photo analysis upload defaults
pub const PHOTO_FIELD_NAME: &str = "file";
pub const PHOTO_FILE_NAME: &str = "photo.jpg";
pub const PHOTO_MIME_TYPE: &str = "image/jpeg";

/// Backend endpoint paths, relative to the API base URL.
pub mod endpoints {
    // Auth
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const PHONE_SEND_CODE: &str = "/auth/phone/send-code";
    pub const PHONE_VERIFY: &str = "/auth/phone/verify";
    pub const APPLE_LOGIN: &str = "/auth/apple/login";
    pub const REFRESH_TOKEN: &str = "/auth/refresh";

    // Profile
    pub const PROFILE_ME: &str = "/profile/me";
    pub const PROFILE: &str = "/profile";
    pub const PROFILE_CALCULATE: &str = "/profile/calculate";

    // Meals
    pub const MEALS_TODAY: &str = "/meals/today";
    pub const MEALS: &str = "/meals";

    // Statistics
    pub const STATS_TODAY: &str = "/statistics/today";
    pub const STATS_WEEK: &str = "/statistics/week";
    pub const STATS_YESTERDAY: &str = "/statistics/yesterday";

    // Analysis
    pub const ANALYSIS_TEXT: &str = "/analysis/text";
    pub const ANALYSIS_PHOTO: &str = "/analysis/photo";

    // Subscription
    pub const SUBSCRIPTION_STATUS: &str = "/subscription/status";

    /// Path for a single meal, e.g. `/meals/42`.
    pub fn meal(id: i64) -> String {
        format!("{MEALS}/{id}")
    }
}
