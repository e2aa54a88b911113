//! Daily and weekly statistics records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// `GET /statistics/today` (also used for yesterday)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    pub macros: Macros,
    pub calories_consumed: i64,
    pub calories_goal: i64,
    pub protein_goal: f64,
    pub fat_goal: f64,
    pub carbs_goal: f64,
}

/// `GET /statistics/week`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekStats {
    pub target_calories: i64,
    pub days: Vec<DayStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub day: String,
    pub date: String,
    pub calories: i64,
    pub percentage: f64,
    pub color: String,
}
