//! Service container
//!
//! Builds one [`ApiClient`] and every backend service around it. Callers hold
//! the container (or clone out the `Arc`s they need) instead of reaching for
//! globals.

use std::sync::Arc;

use calorigram_common::{CredentialStore, SecretStore};
use calorigram_core::SessionService;
use calorigram_domain::{Config, Result};
use tracing::info;

use crate::api::{ApiClient, ApiClientConfig};
use crate::services::{
    AnalysisService, AuthService, MealsService, ProfileService, StatisticsService,
    SubscriptionService,
};

#[derive(Clone)]
pub struct ServiceContainer {
    pub api: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
    pub profile: Arc<ProfileService>,
    pub meals: Arc<MealsService>,
    pub statistics: Arc<StatisticsService>,
    pub analysis: Arc<AnalysisService>,
    pub subscription: Arc<SubscriptionService>,
}

impl ServiceContainer {
    /// Wire every service over `store`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &Config, store: Arc<dyn SecretStore>) -> Result<Self> {
        let credentials = CredentialStore::new(store);
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api), credentials)?);

        info!(base_url = %config.api.base_url, "Service container ready");

        Ok(Self {
            auth: Arc::new(AuthService::new(api.clone())),
            profile: Arc::new(ProfileService::new(api.clone())),
            meals: Arc::new(MealsService::new(api.clone())),
            statistics: Arc::new(StatisticsService::new(api.clone())),
            analysis: Arc::new(AnalysisService::new(api.clone())),
            subscription: Arc::new(SubscriptionService::new(api.clone())),
            api,
        })
    }

    /// Wire every service over the OS keychain.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    #[cfg(feature = "platform")]
    pub fn with_keychain(config: &Config) -> Result<Self> {
        let store = calorigram_common::KeychainProvider::new(config.keychain.service_name.clone());
        Self::new(config, Arc::new(store))
    }

    pub fn credentials(&self) -> &CredentialStore {
        self.api.credentials()
    }

    /// Session restore policy over this container's auth service.
    pub fn session(&self) -> SessionService {
        SessionService::new(self.auth.clone())
    }
}
