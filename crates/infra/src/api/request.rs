//! Request descriptors

use std::borrow::Cow;

use calorigram_domain::{ApiError, PhotoUpload};
use reqwest::Method;
use serde::Serialize;

/// One logical API call.
///
/// Requests require authentication by default; use [`ApiRequest::public`]
/// for sign-in endpoints.
///
/// ```ignore
/// let request = ApiRequest::post(endpoints::LOGIN).json(&credentials).public();
/// let response: AuthResponse = api.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest<'a, B: ?Sized = ()> {
    pub(crate) endpoint: Cow<'a, str>,
    pub(crate) method: Method,
    pub(crate) body: Option<&'a B>,
    pub(crate) requires_auth: bool,
    pub(crate) max_retries: Option<u32>,
}

impl<'a> ApiRequest<'a, ()> {
    pub fn new(method: Method, endpoint: impl Into<Cow<'a, str>>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: None,
            requires_auth: true,
            max_retries: None,
        }
    }

    pub fn get(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }
}

impl<'a, B: ?Sized> ApiRequest<'a, B> {
    /// Attach a JSON body.
    pub fn json<C: ?Sized>(self, body: &'a C) -> ApiRequest<'a, C> {
        ApiRequest {
            endpoint: self.endpoint,
            method: self.method,
            body: Some(body),
            requires_auth: self.requires_auth,
            max_retries: self.max_retries,
        }
    }

    /// Send without a bearer token.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Total attempts for transport failures (at least one). Defaults to
    /// the client's configured value.
    pub fn max_retries(mut self, attempts: u32) -> Self {
        self.max_retries = Some(attempts.max(1));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

/// Body as sent on the wire, prepared once per logical call.
#[derive(Debug)]
pub(crate) enum Payload {
    Empty,
    Json(Vec<u8>),
    Photo(PhotoUpload),
}

impl Payload {
    pub(crate) fn from_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Self, ApiError> {
        match body {
            Some(body) => serde_json::to_vec(body)
                .map(Self::Json)
                .map_err(|err| ApiError::Decoding(format!("Failed to serialize body: {err}"))),
            None => Ok(Self::Empty),
        }
    }
}
