//! Meal analysis from a text description or a photo.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_core::AnalysisPort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{AnalysisResponse, PhotoUpload, Result, TextAnalysisRequest};
use tracing::instrument;

use crate::api::ApiClient;

pub struct AnalysisService {
    api: Arc<ApiClient>,
}

impl AnalysisService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AnalysisPort for AnalysisService {
    #[instrument(skip(self, description), fields(len = description.len()))]
    async fn analyze_text(&self, description: &str) -> Result<AnalysisResponse> {
        let request = TextAnalysisRequest { description: description.to_string() };
        self.api.post(endpoints::ANALYSIS_TEXT, &request).await
    }

    #[instrument(skip(self, photo))]
    async fn analyze_photo(&self, photo: PhotoUpload) -> Result<AnalysisResponse> {
        self.api.upload(endpoints::ANALYSIS_PHOTO, photo).await
    }
}
