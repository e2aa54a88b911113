//! Daily and weekly statistics.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_core::StatisticsPort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{Result, TodayStats, WeekStats};
use tracing::instrument;

use crate::api::ApiClient;

pub struct StatisticsService {
    api: Arc<ApiClient>,
}

impl StatisticsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StatisticsPort for StatisticsService {
    #[instrument(skip(self))]
    async fn today(&self) -> Result<TodayStats> {
        self.api.get(endpoints::STATS_TODAY).await
    }

    #[instrument(skip(self))]
    async fn week(&self) -> Result<WeekStats> {
        self.api.get(endpoints::STATS_WEEK).await
    }

    #[instrument(skip(self))]
    async fn yesterday(&self) -> Result<TodayStats> {
        self.api.get(endpoints::STATS_YESTERDAY).await
    }
}
