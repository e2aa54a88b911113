//! Profile read/update and target calculation.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_core::ProfilePort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{
    CalculationResponse, ProfileCalculation, ProfileUpdate, Result, StatusResponse, User,
};
use tracing::instrument;

use crate::api::ApiClient;

pub struct ProfileService {
    api: Arc<ApiClient>,
}

impl ProfileService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProfilePort for ProfileService {
    #[instrument(skip(self))]
    async fn me(&self) -> Result<User> {
        self.api.get(endpoints::PROFILE_ME).await
    }

    #[instrument(skip(self, update))]
    async fn update(&self, update: ProfileUpdate) -> Result<StatusResponse> {
        self.api.put(endpoints::PROFILE, &update).await
    }

    #[instrument(skip(self, calculation))]
    async fn calculate(&self, calculation: ProfileCalculation) -> Result<CalculationResponse> {
        self.api.post(endpoints::PROFILE_CALCULATE, &calculation).await
    }
}
