//! Authenticated request pipeline
//!
//! Provides the single HTTP entry point for every backend service with
//! transport retry, bearer injection and a one-shot token refresh on 401.

use std::sync::Arc;
use std::time::Duration;

use calorigram_common::observability::redact_secret;
use calorigram_common::CredentialStore;
use calorigram_domain::constants::{endpoints, PHOTO_FIELD_NAME};
use calorigram_domain::{
    ApiConfig, ApiError, PhotoUpload, RefreshTokenRequest, RefreshTokenResponse, Result,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::auth::{stored_access_token, RefreshGate};
use super::request::{ApiRequest, Payload};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API, endpoint paths are appended verbatim
    pub base_url: String,
    /// Timeout for a single HTTP exchange
    pub timeout: Duration,
    /// Attempts for transport failures (initial try included)
    pub max_retries: u32,
    /// First backoff delay, doubled after every failed attempt
    pub backoff_base: Duration,
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_retries: config.max_retries.max(1),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// How a response ends a logical call.
enum Outcome {
    Success(Vec<u8>),
    Unauthorized,
    Failed(ApiError),
}

/// API client with retry and token refresh
pub struct ApiClient {
    http_client: HttpClient,
    credentials: CredentialStore,
    config: ApiClientConfig,
    refresh_gate: RefreshGate,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(config: ApiClientConfig, credentials: CredentialStore) -> Result<Self> {
        let mut builder =
            HttpClient::builder().timeout(config.timeout).base_backoff(config.backoff_base);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder.build()?;

        Ok(Self { http_client, credentials, config, refresh_gate: RefreshGate::new() })
    }

    /// Create a builder for fluent configuration
    pub fn builder(credentials: CredentialStore) -> ApiClientBuilder {
        ApiClientBuilder { config: None, credentials }
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Execute a request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if `base_url + endpoint` is not a valid URL
    /// - `Unauthorized` if auth is required and no token is stored (no
    ///   network call is made), or the token was rejected and could not be
    ///   refreshed
    /// - `Decoding` if the body cannot be serialized or the response decoded
    /// - `Server` for any other non-2xx status
    /// - `Network` once transport retries are exhausted
    #[instrument(
        skip(self, request),
        fields(method = %request.method, endpoint = %request.endpoint, auth = request.requires_auth)
    )]
    pub async fn request<T, B>(&self, request: ApiRequest<'_, B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.resolve(&request.endpoint)?;
        let token = self.bearer_token(request.requires_auth)?;
        let payload = Payload::from_body(request.body)?;
        let attempts = request.max_retries.unwrap_or(self.config.max_retries);

        self.execute(request.method, url, payload, token, attempts).await
    }

    /// Upload a photo as `multipart/form-data` with a single `file` part.
    ///
    /// Same auth, retry and refresh rules as [`ApiClient::request`].
    #[instrument(skip(self, photo), fields(endpoint = %endpoint, bytes = photo.bytes.len()))]
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        photo: PhotoUpload,
    ) -> Result<T> {
        let url = self.resolve(endpoint)?;
        let token = self.bearer_token(true)?;
        let attempts = self.config.max_retries;

        self.execute(Method::POST, url, Payload::Photo(photo), token, attempts).await
    }

    /// Authenticated GET
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::get(path)).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(ApiRequest::post(path).json(body)).await
    }

    /// Authenticated PUT with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(ApiRequest::put(path).json(body)).await
    }

    /// Authenticated DELETE
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::delete(path)).await
    }

    fn resolve(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}{}", self.config.base_url, endpoint);
        Url::parse(&raw).map_err(|err| ApiError::InvalidUrl(format!("{raw}: {err}")))
    }

    fn bearer_token(&self, requires_auth: bool) -> Result<Option<String>> {
        if !requires_auth {
            return Ok(None);
        }

        match stored_access_token(&self.credentials) {
            Some(token) => Ok(Some(token)),
            None => {
                debug!("No access token stored");
                Err(ApiError::Unauthorized)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        payload: Payload,
        token: Option<String>,
        attempts: u32,
    ) -> Result<T> {
        let requires_auth = token.is_some();
        let response = self
            .http_client
            .send(|| self.build(&method, &url, &payload, token.as_deref()), attempts)
            .await?;

        match classify(response, requires_auth).await {
            Outcome::Success(body) => {
                info!(%method, %url, "API request successful");
                decode(&body)
            }
            Outcome::Failed(error) => Err(error),
            Outcome::Unauthorized => {
                let rejected = token.unwrap_or_default();
                let Some(fresh) = self.refresh_access_token(&rejected).await else {
                    return Err(ApiError::Unauthorized);
                };

                debug!(%method, %url, "Replaying request with refreshed token");
                let response = self
                    .http_client
                    .send(|| self.build(&method, &url, &payload, Some(&fresh)), 1)
                    .await?;

                match classify(response, true).await {
                    Outcome::Success(body) => decode(&body),
                    Outcome::Unauthorized => Err(ApiError::Unauthorized),
                    Outcome::Failed(error) => Err(error),
                }
            }
        }
    }

    fn build(
        &self,
        method: &Method,
        url: &Url,
        payload: &Payload,
        token: Option<&str>,
    ) -> Result<RequestBuilder> {
        let mut builder = self.http_client.request(method.clone(), url.clone());

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        Ok(match payload {
            Payload::Empty => builder,
            Payload::Json(bytes) => {
                builder.header(CONTENT_TYPE, "application/json").body(bytes.clone())
            }
            Payload::Photo(photo) => builder.multipart(photo_form(photo)?),
        })
    }

    /// Replace a rejected access token. Any failure clears both tokens.
    async fn refresh_access_token(&self, rejected: &str) -> Option<String> {
        self.refresh_gate
            .replace(&self.credentials, rejected, || async move {
                match self.request_new_access_token().await {
                    Ok(token) => {
                        info!(token = %redact_secret(&token), "Access token refreshed");
                        if let Err(error) = self.credentials.set_access_token(&token) {
                            warn!(%error, "Failed to persist refreshed access token");
                        }
                        Some(token)
                    }
                    Err(error) => {
                        warn!(%error, "Token refresh failed, clearing credentials");
                        self.credentials.clear_all();
                        None
                    }
                }
            })
            .await
    }

    /// POST the refresh token. Never enters the 401 branch.
    async fn request_new_access_token(&self) -> Result<String> {
        let refresh_token = self.credentials.require_refresh_token().map_err(|error| {
            warn!(%error, "No usable refresh token");
            ApiError::Unauthorized
        })?;
        let url = self.resolve(endpoints::REFRESH_TOKEN)?;
        let payload = Payload::from_body(Some(&RefreshTokenRequest { refresh_token }))?;

        let response = self
            .http_client
            .send(|| self.build(&Method::POST, &url, &payload, None), self.config.max_retries)
            .await?;

        match classify(response, false).await {
            Outcome::Success(body) => {
                decode::<RefreshTokenResponse>(&body).map(|response| response.access_token)
            }
            Outcome::Unauthorized => Err(ApiError::Unauthorized),
            Outcome::Failed(error) => Err(error),
        }
    }
}

/// Read the body and decide how the call ends.
///
/// A 401 only maps to [`Outcome::Unauthorized`] for authenticated requests;
/// on public endpoints it is an ordinary server error, so a rejected login
/// never triggers a refresh.
///
/// Once the status line and headers have arrived the exchange counts as
/// answered: a connection dropped while reading the body surfaces as
/// `Network` without another attempt.
async fn classify(response: Response, requires_auth: bool) -> Outcome {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED && requires_auth {
        debug!("Access token rejected");
        return Outcome::Unauthorized;
    }

    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        // reqwest reports a cut-off body as a decode error; it is a transport failure.
        Err(err) => {
            let cause = format!("Failed to read response body: {err}");
            return Outcome::Failed(ApiError::Network(cause));
        }
    };

    if status.is_success() {
        Outcome::Success(body)
    } else {
        let body = String::from_utf8_lossy(&body).into_owned();
        debug!(status = status.as_u16(), "API returned non-success status");
        Outcome::Failed(ApiError::server(status.as_u16(), body))
    }
}

/// Decode a 2xx body. An empty body decodes as JSON `null` when the target
/// type allows it, otherwise it is `NoData`.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null).map_err(|_| ApiError::NoData);
    }

    serde_json::from_slice(body).map_err(|err| ApiError::from(InfraError::from(err)))
}

fn photo_form(photo: &PhotoUpload) -> Result<Form> {
    let part = Part::bytes(photo.bytes.clone())
        .file_name(photo.file_name.clone())
        .mime_str(&photo.mime_type)
        .map_err(|err| ApiError::Decoding(format!("Invalid upload content type: {err}")))?;

    Ok(Form::new().part(PHOTO_FIELD_NAME, part))
}

/// Builder for API client
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    credentials: CredentialStore,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config.unwrap_or_default(), self.credentials)
    }

    /// Build and wrap in an `Arc` for sharing between services.
    pub fn build_shared(self) -> Result<Arc<ApiClient>> {
        self.build().map(Arc::new)
    }
}
