//! Subscription status records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub days_remaining: i64,
    pub features: SubscriptionFeatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionFeatures {
    pub meal_analysis: bool,
    pub unlimited_meals: bool,
    pub advanced_stats: bool,
    pub export_data: bool,
}
