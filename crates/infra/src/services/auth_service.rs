//! Sign-in flows and local session helpers.
//!
//! Every successful sign-in persists the returned credential pair before the
//! response is handed back. A keychain write failure is logged and does not
//! fail the sign-in: the caller still gets the user, and the next launch
//! simply starts signed out.

use std::sync::Arc;

use async_trait::async_trait;
use calorigram_common::CredentialStore;
use calorigram_core::AuthPort;
use calorigram_domain::constants::endpoints;
use calorigram_domain::{
    AppleLoginRequest, AuthResponse, LoginRequest, PhoneSendCodeRequest, PhoneSendCodeResponse,
    PhoneVerifyRequest, RegisterRequest, Result, User,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::api::auth::stored_access_token;
use crate::api::{ApiClient, ApiRequest};

pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn credentials(&self) -> &CredentialStore {
        self.api.credentials()
    }

    /// POST a public sign-in request and persist the returned pair.
    async fn authenticate<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.api.request(ApiRequest::post(endpoint).json(body).public()).await?;

        let credentials = self.credentials();
        if let Err(error) =
            credentials.store_tokens(&response.access_token, &response.refresh_token)
        {
            warn!(%error, "Failed to persist credential pair");
        }

        info!(user_id = response.user.id, "Signed in");
        Ok(response)
    }
}

#[async_trait]
impl AuthPort for AuthService {
    #[instrument(skip(self, request))]
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        self.authenticate(endpoints::REGISTER, &request).await
    }

    #[instrument(skip(self, request))]
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        self.authenticate(endpoints::LOGIN, &request).await
    }

    #[instrument(skip(self, phone_number))]
    async fn send_phone_code(&self, phone_number: &str) -> Result<bool> {
        let request = PhoneSendCodeRequest { phone_number: phone_number.to_string() };
        let response: PhoneSendCodeResponse = self
            .api
            .request(ApiRequest::post(endpoints::PHONE_SEND_CODE).json(&request).public())
            .await?;

        Ok(response.success)
    }

    #[instrument(skip(self, request))]
    async fn verify_phone_code(&self, request: PhoneVerifyRequest) -> Result<AuthResponse> {
        self.authenticate(endpoints::PHONE_VERIFY, &request).await
    }

    #[instrument(skip(self, request))]
    async fn login_with_apple(&self, request: AppleLoginRequest) -> Result<AuthResponse> {
        self.authenticate(endpoints::APPLE_LOGIN, &request).await
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<User> {
        self.api.get(endpoints::PROFILE_ME).await
    }

    fn logout(&self) {
        info!("Signing out");
        self.credentials().clear_all();
    }

    fn is_logged_in(&self) -> bool {
        self.credentials().is_authenticated()
    }

    fn access_token(&self) -> Option<String> {
        stored_access_token(self.credentials())
    }
}
