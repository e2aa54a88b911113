use std::time::Duration;

use calorigram_domain::constants::{DEFAULT_BACKOFF_BASE_MS, DEFAULT_TIMEOUT_SECS};
use calorigram_domain::ApiError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;

/// HTTP client that retries transport failures with exponential backoff.
///
/// Any HTTP response, whatever its status, ends the retry loop; status
/// handling belongs to the caller.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send a request, making up to `attempts` tries.
    ///
    /// `build` is invoked once per attempt so bodies that cannot be cloned
    /// (multipart forms) are rebuilt each time. Only transport failures are
    /// retried; an error from `build` or from request construction returns
    /// immediately.
    pub async fn send<F>(&self, build: F, attempts: u32) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let attempts = attempts.max(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            let request =
                build()?.build().map_err(|err| ApiError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt = attempt + 1, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    debug!(
                        attempt = attempt + 1,
                        %method,
                        %url,
                        status = %response.status(),
                        "received HTTP response"
                    );
                    return Ok(response);
                }
                Err(err) => {
                    let error = ApiError::from(InfraError::from(err));
                    if !error.is_retryable() {
                        return Err(error);
                    }

                    if attempt + 1 < attempts {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            attempt = attempt + 1,
                            %method,
                            %url,
                            %error,
                            ?delay,
                            "HTTP request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    } else {
                        warn!(
                            attempt = attempt + 1,
                            %method,
                            %url,
                            %error,
                            "HTTP request failed, giving up"
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::Network("no attempt was made".into())))
    }

    /// Delay after the zero-based `attempt` failed: base, 2×base, 4×base …
    pub(crate) fn backoff_delay(&self, attempt: u32) -> Duration {
        let multiplier = 1u32 << attempt.min(16);
        self.base_backoff.saturating_mul(multiplier)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_backoff: Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        // Proxy settings come from the environment (`HTTPS_PROXY`, `NO_PROXY`, ...).
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| ApiError::from(InfraError::from(err)))?;

        Ok(HttpClient { client, base_backoff: self.base_backoff })
    }
}
