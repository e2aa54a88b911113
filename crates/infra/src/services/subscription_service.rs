//! Subscription status.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_core::SubscriptionPort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{Result, Subscription};
use tracing::instrument;

use crate::api::ApiClient;

pub struct SubscriptionService {
    api: Arc<ApiClient>,
}

impl SubscriptionService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SubscriptionPort for SubscriptionService {
    #[instrument(skip(self))]
    async fn status(&self) -> Result<Subscription> {
        self.api.get(endpoints::SUBSCRIPTION_STATUS).await
    }
}
