//! Meal diary records

use serde::{Deserialize, Serialize};

/// One diary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub id: Option<i64>,
    pub meal_type: String,
    #[serde(default)]
    pub meal_name: Option<String>,
    pub dish_name: String,
    pub calories: i64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /meals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCreate {
    pub meal_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_name: Option<String>,
    pub dish_name: String,
    pub calories: i64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<String>,
}

impl MealCreate {
    /// Manually entered meal (`analysis_type = "manual"`).
    pub fn manual(
        meal_type: impl Into<String>,
        dish_name: impl Into<String>,
        calories: i64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Self {
        Self {
            meal_type: meal_type.into(),
            meal_name: None,
            dish_name: dish_name.into(),
            calories,
            protein,
            fat,
            carbs,
            analysis_type: Some("manual".to_string()),
        }
    }
}

/// Envelope of `GET /meals/today`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealsResponse {
    pub ok: bool,
    #[serde(default)]
    pub items: Option<Vec<Meal>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meals_response_preserves_item_order() {
        let body = r#"{"ok": true, "items": [
            {"id": 2, "meal_type": "lunch", "dish_name": "Soup", "calories": 250,
             "protein": 10.0, "fat": 5.5, "carbs": 30.0},
            {"id": 1, "meal_type": "breakfast", "dish_name": "Oats", "calories": 320,
             "protein": 12.0, "fat": 6.0, "carbs": 54.0, "created_at": "2024-05-01T08:00:00"}
        ]}"#;

        let response: MealsResponse = serde_json::from_str(body).unwrap();
        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].dish_name, "Soup");
        assert_eq!(items[1].id, Some(1));
        assert_eq!(items[1].created_at.as_deref(), Some("2024-05-01T08:00:00"));
    }

    #[test]
    fn manual_meal_serializes_analysis_type() {
        let meal = MealCreate::manual("snack", "Apple", 95, 0.5, 0.3, 25.0);
        let json = serde_json::to_value(&meal).unwrap();

        assert_eq!(json["analysis_type"], "manual");
        assert_eq!(json["meal_type"], "snack");
        assert!(json.get("meal_name").is_none());
    }
}
