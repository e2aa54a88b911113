//! Calorigram API pipeline
//!
//! Every backend call goes through [`ApiClient`], which resolves the endpoint,
//! attaches the stored bearer token, retries transport failures with
//! exponential backoff and, on a 401, refreshes the access token once and
//! replays the request.
//!
//! # Architecture
//!
//! - [`HttpClient`](crate::http::HttpClient) owns transport retries
//! - [`ApiClient`] classifies responses and owns the refresh sub-protocol
//! - [`auth`] holds the refresh gate and token lookup helpers

pub mod auth;
pub mod client;
pub mod request;

pub use auth::RefreshGate;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use request::ApiRequest;
