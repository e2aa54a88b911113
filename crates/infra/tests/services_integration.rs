//! Integration tests for the backend services
//!
//! Each test mounts the endpoint a service is expected to call and checks
//! the method, path, auth header and body it sends.

#[path = "support.rs"]
mod support;

use std::sync::Arc;

use calorigram_common::testing::MemorySecretStore;
use calorigram_core::{
    AnalysisPort, AuthPort, MealsPort, ProfilePort, SessionState, StatisticsPort, SubscriptionPort,
};
use calorigram_domain::{
    ApiError, AppleLoginRequest, Config, LoginRequest, MealCreate, PhoneVerifyRequest,
    ProfileCalculation, ProfileUpdate, RegisterRequest,
};
use calorigram_infra::{
    AnalysisService, AuthService, MealsService, ProfileService, ServiceContainer, StatisticsService,
    SubscriptionService,
};
use serde_json::json;
use support::{auth_json, meal_json, user_json, TestClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_status() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": true }))
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn login_persists_credential_pair() {
    let server = MockServer::start().await;
    let client = TestClient::new(&server);
    let auth = AuthService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "ann@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json("a1", "r1")))
        .expect(1)
        .mount(&server)
        .await;

    let response = auth
        .login(LoginRequest { email: "ann@example.com".into(), password: "secret".into() })
        .await
        .expect("login");

    assert_eq!(response.user.name, "Ann");
    assert_eq!(client.access_token().as_deref(), Some("a1"));
    assert_eq!(client.refresh_token().as_deref(), Some("r1"));
    assert!(auth.is_logged_in());
    assert_eq!(auth.access_token().as_deref(), Some("a1"));
}

#[tokio::test]
async fn login_is_sent_without_bearer_header() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "stale", "stale-refresh");
    let auth = AuthService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json("a2", "r2")))
        .expect(1)
        .mount(&server)
        .await;

    auth.login(LoginRequest { email: "ann@example.com".into(), password: "secret".into() })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(client.access_token().as_deref(), Some("a2"));
}

#[tokio::test]
async fn duplicate_registration_has_friendly_message() {
    let server = MockServer::start().await;
    let client = TestClient::new(&server);
    let auth = AuthService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"detail":"Email already registered"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = auth
        .register(RegisterRequest {
            email: "ann@example.com".into(),
            password: "pw".into(),
            name: "Ann".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.user_message(), "This email is already registered. Try signing in.");
    assert!(!auth.is_logged_in());
}

#[tokio::test]
async fn phone_code_flow() {
    let server = MockServer::start().await;
    let client = TestClient::new(&server);
    let auth = AuthService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/auth/phone/send-code"))
        .and(body_json(json!({ "phone_number": "+79990000000" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "sent" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/phone/verify"))
        .and(body_json(json!({ "phone_number": "+79990000000", "code": "1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json("pa", "pr")))
        .expect(1)
        .mount(&server)
        .await;

    assert!(auth.send_phone_code("+79990000000").await.unwrap());
    auth.verify_phone_code(PhoneVerifyRequest {
        phone_number: "+79990000000".into(),
        code: "1234".into(),
    })
        .await
        .unwrap();

    assert_eq!(client.access_token().as_deref(), Some("pa"));
}

#[tokio::test]
async fn apple_login_omits_missing_email() {
    let server = MockServer::start().await;
    let client = TestClient::new(&server);
    let auth = AuthService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/auth/apple/login"))
        .and(body_json(json!({
            "identity_token": "id-token",
            "authorization_code": "code",
            "user_identifier": "apple-user"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json("aa", "ar")))
        .expect(1)
        .mount(&server)
        .await;

    auth.login_with_apple(AppleLoginRequest {
        identity_token: "id-token".into(),
        authorization_code: "code".into(),
        user_identifier: "apple-user".into(),
        email: None,
    })
    .await
    .unwrap();

    assert_eq!(client.refresh_token().as_deref(), Some("ar"));
}

#[tokio::test]
async fn logout_clears_credentials() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "a", "r");
    let auth = AuthService::new(client.api.clone());

    auth.logout();

    assert!(!auth.is_logged_in());
    assert_eq!(auth.access_token(), None);
    assert!(client.store.is_empty());
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn profile_update_and_calculate() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let profile = ProfileService::new(client.api.clone());

    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .and(header("Authorization", "Bearer access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "Eve")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(body_json(json!({
            "name": "Eve",
            "age": 31,
            "goal": "lose",
            "activity_level": "moderate"
        })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/profile/calculate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let me = profile.me().await.unwrap();
    assert_eq!(me.id, 5);

    let status = profile
        .update(ProfileUpdate {
            name: "Eve".into(),
            age: Some(31),
            height: None,
            weight: None,
            goal: "lose".into(),
            activity_level: "moderate".into(),
            gender: None,
        })
        .await
        .unwrap();
    assert!(status.ok);

    let calculation = profile
        .calculate(ProfileCalculation {
            gender: "female".into(),
            age: 31,
            height: 168.0,
            weight: 62.5,
            activity_level: "moderate".into(),
            goal: "lose".into(),
        })
        .await
        .unwrap();
    assert!(calculation.success);
}

// ============================================================================
// Meals
// ============================================================================

#[tokio::test]
async fn today_meals_keep_server_order() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let meals = MealsService::new(client.api.clone());

    Mock::given(method("GET"))
        .and(path("/meals/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "items": [
                meal_json(3, "dinner", "Pasta", 700),
                meal_json(1, "breakfast", "Oats", 320),
                meal_json(2, "lunch", "Soup", 250)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = meals.today().await.unwrap();

    let dishes: Vec<_> = items.iter().map(|m| m.dish_name.as_str()).collect();
    assert_eq!(dishes, ["Pasta", "Oats", "Soup"]);
}

#[tokio::test]
async fn failed_meals_envelope_is_an_error() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let meals = MealsService::new(client.api.clone());

    Mock::given(method("GET"))
        .and(path("/meals/today"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": false, "error": "db unavailable" })),
        )
        .mount(&server)
        .await;

    assert_eq!(meals.today().await, Err(ApiError::server(200, "db unavailable")));
}

#[tokio::test]
async fn add_and_delete_meal() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let meals = MealsService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/meals"))
        .and(body_json(json!({
            "meal_type": "snack",
            "dish_name": "Apple",
            "calories": 95,
            "protein": 0.5,
            "fat": 0.3,
            "carbs": 25.0,
            "analysis_type": "manual"
        })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/meals/42"))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    assert!(meals.add(MealCreate::manual("snack", "Apple", 95, 0.5, 0.3, 25.0)).await.unwrap().ok);
    assert!(meals.delete(42).await.unwrap().ok);
}

// ============================================================================
// Statistics, analysis, subscription
// ============================================================================

#[tokio::test]
async fn statistics_endpoints() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let stats = StatisticsService::new(client.api.clone());
    let today = json!({
        "macros": { "protein": 80.0, "fat": 50.0, "carbs": 200.0 },
        "calories_consumed": 1500,
        "calories_goal": 2000,
        "protein_goal": 120.0,
        "fat_goal": 70.0,
        "carbs_goal": 250.0
    });

    Mock::given(method("GET"))
        .and(path("/statistics/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(today.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statistics/yesterday"))
        .respond_with(ResponseTemplate::new(200).set_body_json(today))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statistics/week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "target_calories": 2000,
            "days": [{
                "day": "Mon",
                "date": "2024-05-06",
                "calories": 1800,
                "percentage": 90.0,
                "color": "green"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let today = stats.today().await.unwrap();
    assert_eq!(calorigram_core::remaining_calories(&today), 500);
    assert_eq!(stats.yesterday().await.unwrap().calories_consumed, 1500);
    assert_eq!(stats.week().await.unwrap().days.len(), 1);
}

#[tokio::test]
async fn text_analysis_and_subscription() {
    let server = MockServer::start().await;
    let client = TestClient::signed_in(&server, "access", "refresh");
    let analysis = AnalysisService::new(client.api.clone());
    let subscription = SubscriptionService::new(client.api.clone());

    Mock::given(method("POST"))
        .and(path("/analysis/text"))
        .and(body_json(json!({ "description": "two eggs and toast" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "name": "Eggs on toast",
                "calories": 350,
                "protein": 20.0,
                "fat": 18.0,
                "carbs": 28.0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subscription/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_active": true,
            "type": "premium",
            "days_remaining": 30,
            "features": {
                "meal_analysis": true,
                "unlimited_meals": true,
                "advanced_stats": true,
                "export_data": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = analysis.analyze_text("two eggs and toast").await.unwrap();
    assert_eq!(result.result.unwrap().calories, 350);

    let status = subscription.status().await.unwrap();
    assert_eq!(status.kind, "premium");
    assert_eq!(status.expires_at, None);
}

// ============================================================================
// Container and session restore
// ============================================================================

fn container_for(server: &MockServer) -> (ServiceContainer, Arc<MemorySecretStore>) {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.backoff_base_ms = 1;
    let store = Arc::new(MemorySecretStore::new());
    let container = ServiceContainer::new(&config, store.clone()).expect("container");
    (container, store)
}

#[tokio::test]
async fn session_restore_signs_in_with_valid_token() {
    let server = MockServer::start().await;
    let (container, _store) = container_for(&server);
    container.credentials().store_tokens("access", "refresh").unwrap();

    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(9, "Kim")))
        .expect(1)
        .mount(&server)
        .await;

    match container.session().restore().await {
        SessionState::SignedIn(user) => assert_eq!(user.id, 9),
        other => panic!("expected signed in, got {other:?}"),
    }
}

#[tokio::test]
async fn session_restore_signs_out_deleted_user() {
    let server = MockServer::start().await;
    let (container, store) = container_for(&server);
    container.credentials().store_tokens("access", "refresh").unwrap();

    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"User not found"}"#))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(container.session().restore().await, SessionState::SignedOut);
    assert!(store.is_empty());
}

#[tokio::test]
async fn session_restore_without_token_skips_network() {
    let server = MockServer::start().await;
    let (container, _store) = container_for(&server);

    assert_eq!(container.session().restore().await, SessionState::SignedOut);
    assert!(server.received_requests().await.unwrap().is_empty());
}
