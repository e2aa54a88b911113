//! Today's meal diary.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_core::MealsPort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{ApiError, Meal, MealCreate, MealsResponse, Result, StatusResponse};
use tracing::{debug, instrument};

use crate::api::ApiClient;

pub struct MealsService {
    api: Arc<ApiClient>,
}

impl MealsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Unwrap the `{ok, items, error}` envelope.
///
/// A failed envelope is surfaced as a server error with status 200 so it is
/// never mistaken for an empty diary.
pub(crate) fn unwrap_meals(response: MealsResponse) -> Result<Vec<Meal>> {
    if !response.ok {
        let body = response.error.unwrap_or_else(|| "request failed".to_string());
        return Err(ApiError::server(200, body));
    }

    Ok(response.items.unwrap_or_default())
}

#[async_trait]
impl MealsPort for MealsService {
    #[instrument(skip(self))]
    async fn today(&self) -> Result<Vec<Meal>> {
        let response: MealsResponse = self.api.get(endpoints::MEALS_TODAY).await?;
        let meals = unwrap_meals(response)?;
        debug!(count = meals.len(), "Loaded today's meals");
        Ok(meals)
    }

    #[instrument(skip(self, meal), fields(meal_type = %meal.meal_type))]
    async fn add(&self, meal: MealCreate) -> Result<StatusResponse> {
        self.api.post(endpoints::MEALS, &meal).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<StatusResponse> {
        self.api.delete(&endpoints::meal(id)).await
    }
}
