//! Shared fixtures for pipeline and service tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use calorigram_common::testing::MemorySecretStore;
use calorigram_common::CredentialStore;
use calorigram_infra::{ApiClient, ApiClientConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Client wired to a mock server with an in-memory keychain.
pub struct TestClient {
    pub api: Arc<ApiClient>,
    pub credentials: CredentialStore,
    pub store: Arc<MemorySecretStore>,
}

impl TestClient {
    /// Client for `server` with a 1 ms backoff base and three attempts.
    pub fn new(server: &MockServer) -> Self {
        Self::with_base_url(&server.uri())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let store = Arc::new(MemorySecretStore::new());
        let credentials = CredentialStore::new(store.clone());
        let config = ApiClientConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
            max_retries: 3,
            backoff_base: Duration::from_millis(1),
            user_agent: None,
        };
        let api = Arc::new(ApiClient::new(config, credentials.clone()).expect("api client"));

        Self { api, credentials, store }
    }

    /// Same as [`TestClient::new`] with a stored credential pair.
    pub fn signed_in(server: &MockServer, access: &str, refresh: &str) -> Self {
        let client = Self::new(server);
        client.credentials.store_tokens(access, refresh).expect("store tokens");
        client
    }

    pub fn access_token(&self) -> Option<String> {
        self.credentials.access_token().expect("read access token")
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.credentials.refresh_token().expect("read refresh token")
    }
}

/// Base URL on a port nothing listens on, so every request fails to connect.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}

pub fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", name.to_lowercase()),
        "name": name,
        "target_calories": 2000
    })
}

pub fn auth_json(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer",
        "user": user_json(1, "Ann")
    })
}

pub fn meal_json(id: i64, meal_type: &str, dish: &str, calories: i64) -> Value {
    json!({
        "id": id,
        "meal_type": meal_type,
        "dish_name": dish,
        "calories": calories,
        "protein": 10.0,
        "fat": 5.0,
        "carbs": 20.0
    })
}
