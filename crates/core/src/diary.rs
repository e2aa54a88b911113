//! Diary aggregation over today's meals

use calorigram_domain::{Macros, Meal, TodayStats};

/// Meals sharing a `meal_type`, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct MealGroup {
    pub meal_type: String,
    pub meals: Vec<Meal>,
}

impl MealGroup {
    pub fn totals(&self) -> DiaryTotals {
        totals(&self.meals)
    }
}

/// Summed calories and macros.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiaryTotals {
    pub calories: i64,
    pub macros: Macros,
}

/// Group meals by `meal_type`. Groups appear in order of first occurrence
/// and keep the input order within each group.
pub fn group_by_meal_type(meals: &[Meal]) -> Vec<MealGroup> {
    let mut groups: Vec<MealGroup> = Vec::new();

    for meal in meals {
        match groups.iter_mut().find(|group| group.meal_type == meal.meal_type) {
            Some(group) => group.meals.push(meal.clone()),
            None => groups.push(MealGroup {
                meal_type: meal.meal_type.clone(),
                meals: vec![meal.clone()],
            }),
        }
    }

    groups
}

pub fn totals(meals: &[Meal]) -> DiaryTotals {
    meals.iter().fold(DiaryTotals::default(), |mut acc, meal| {
        acc.calories += meal.calories;
        acc.macros.protein += meal.protein;
        acc.macros.fat += meal.fat;
        acc.macros.carbs += meal.carbs;
        acc
    })
}

/// Calories left for the day, never negative.
pub fn remaining_calories(stats: &TodayStats) -> i64 {
    (stats.calories_goal - stats.calories_consumed).max(0)
}
