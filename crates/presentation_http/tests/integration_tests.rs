//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    LookupSettings, PlantLookupService,
    error::ApplicationError,
    ports::{IdentificationQuery, PlantIdentificationPort},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::{PlantCandidate, ZeroCoordinatePolicy};
use infrastructure::PlantIdAdapter;
use integration_plantid::PlantIdConfig;
use presentation_http::{REQUEST_ID_HEADER, middleware, routes::create_router, state::AppState};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

/// Identification port returning canned results and counting calls
struct StubIdentification {
    result: Result<Vec<PlantCandidate>, ApplicationError>,
    configured: bool,
    calls: AtomicUsize,
}

impl StubIdentification {
    fn returning(candidates: Vec<PlantCandidate>) -> Self {
        Self {
            result: Ok(candidates),
            configured: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(error: ApplicationError) -> Self {
        Self {
            result: Err(error),
            configured: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::returning(Vec::new())
        }
    }
}

#[async_trait]
impl PlantIdentificationPort for StubIdentification {
    async fn identify(
        &self,
        _query: &IdentificationQuery,
    ) -> Result<Vec<PlantCandidate>, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

fn server_with_port(port: Arc<StubIdentification>, settings: LookupSettings) -> TestServer {
    let service = PlantLookupService::with_settings(port, settings);
    let router = create_router(AppState::new(service))
        .layer(axum::middleware::from_fn(middleware::request_id));
    TestServer::new(router).expect("Failed to create test server")
}

fn server_with_stub(port: Arc<StubIdentification>) -> TestServer {
    server_with_port(port, LookupSettings::default())
}

/// Server wired to a real Plant.id adapter pointing at a mock upstream
fn server_with_upstream(mock_server: &MockServer, api_key: Option<&str>) -> TestServer {
    let adapter = PlantIdAdapter::new(PlantIdConfig {
        api_key: api_key.map(str::to_string),
        base_url: mock_server.uri(),
        timeout_secs: 5,
    })
    .expect("adapter creation should succeed");
    let service = PlantLookupService::new(Arc::new(adapter));
    TestServer::new(create_router(AppState::new(service))).expect("Failed to create test server")
}

fn candidates(count: usize) -> Vec<PlantCandidate> {
    (1..=count)
        .map(|i| PlantCandidate::new(format!("plant-{i}")))
        .collect()
}

fn suggestion(name: &str, family: &str, genus: &str) -> Value {
    json!({
        "name": name,
        "details": {
            "scientific_name": name,
            "taxonomy": {"family": family, "genus": genus},
            "image": {"value": format!("https://img.example/{genus}.jpg")}
        }
    })
}

fn identification_body(suggestions: Vec<Value>) -> Value {
    json!({
        "result": {
            "classification": {
                "suggestions": suggestions
            }
        }
    })
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(Vec::new())));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_when_api_key_configured() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(Vec::new())));

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["plant_id_configured"], true);
}

#[tokio::test]
async fn not_ready_without_api_key() {
    let server = server_with_stub(Arc::new(StubIdentification::unconfigured()));

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["plant_id_configured"], false);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn missing_longitude_is_bad_request() {
    let port = Arc::new(StubIdentification::returning(candidates(1)));
    let server = server_with_stub(Arc::clone(&port));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Latitude and longitude are required"}));
    assert_eq!(port.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_object_is_bad_request() {
    let port = Arc::new(StubIdentification::returning(candidates(1)));
    let server = server_with_stub(Arc::clone(&port));

    let response = server.post("/api/plantDetail").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(port.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn null_coordinates_are_bad_request() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(candidates(1))));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": null, "longitude": 10.0}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn non_object_body_is_bad_request() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(candidates(1))));

    let response = server.post("/api/plantDetail").json(&json!([45.0, -93.0])).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Latitude and longitude are required");
}

#[tokio::test]
async fn zero_latitude_is_bad_request_by_default() {
    let port = Arc::new(StubIdentification::returning(candidates(1)));
    let server = server_with_stub(Arc::clone(&port));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 0, "longitude": 30.0}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Latitude and longitude are required");
    assert_eq!(port.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_latitude_accepted_when_configured() {
    let port = Arc::new(StubIdentification::returning(candidates(1)));
    let settings = LookupSettings {
        zero_coordinates: ZeroCoordinatePolicy::Accept,
        ..Default::default()
    };
    let server = server_with_port(Arc::clone(&port), settings);

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 0, "longitude": 0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["soilType"], "Varies, often sandy or clay-rich");
    assert_eq!(port.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unparseable_body_is_internal_error() {
    let port = Arc::new(StubIdentification::returning(candidates(1)));
    let server = server_with_stub(Arc::clone(&port));

    let response = server.post("/api/plantDetail").text("not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(port.calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Lookup results (stubbed port)
// ============================================================================

#[tokio::test]
async fn northern_lookup_returns_profile() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(vec![
        PlantCandidate::new("Malus domestica").with_taxonomy("Rosaceae", "Malus"),
    ])));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["commonPlants"][0]["name"], "Malus domestica");
    assert_eq!(body["commonPlants"][0]["family"], "Rosaceae");
    assert_eq!(body["soilType"], "Varies, often loamy");
    assert_eq!(body["averageRainfall"], "Varies by region");
    assert_eq!(body["growingSeason"], "Typically April to October");
}

#[tokio::test]
async fn southern_lookup_with_empty_results() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(Vec::new())));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": -33.9, "longitude": 18.4}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["commonPlants"], json!([]));
    assert_eq!(body["soilType"], "Varies, often sandy or clay-rich");
    assert_eq!(body["growingSeason"], "Often year-round in tropical areas");
}

#[tokio::test]
async fn lookup_returns_at_most_five_plants() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(candidates(7))));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 10.0, "longitude": 10.0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body["commonPlants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["plant-1", "plant-2", "plant-3", "plant-4", "plant-5"]);
}

#[tokio::test]
async fn numeric_strings_are_accepted() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(candidates(1))));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": "-12.5", "longitude": "130.8"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["soilType"], "Varies, often sandy or clay-rich");
}

#[tokio::test]
async fn upstream_failure_is_internal_error() {
    let server = server_with_stub(Arc::new(StubIdentification::failing(
        ApplicationError::UpstreamUnreachable,
    )));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "No response received from Plant.id API"}));
}

#[tokio::test]
async fn empty_internal_message_uses_fallback() {
    let server = server_with_stub(Arc::new(StubIdentification::failing(
        ApplicationError::Internal(String::new()),
    )));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "An error occurred while processing your request");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let server = server_with_stub(Arc::new(StubIdentification::returning(Vec::new())));

    let response = server.get("/health").await;

    let value = response.header(REQUEST_ID_HEADER);
    assert!(uuid_like(value.to_str().unwrap()));
}

fn uuid_like(value: &str) -> bool {
    value.len() == 36 && value.chars().filter(|c| *c == '-').count() == 4
}

// ============================================================================
// Full stack against a mock Plant.id upstream
// ============================================================================

#[tokio::test]
async fn full_stack_lookup_sends_expected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/identification"))
        .and(header("Api-Key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identification_body(vec![
                suggestion("Malus domestica", "Rosaceae", "Malus"),
                suggestion("Prunus avium", "Rosaceae", "Prunus"),
            ])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = server_with_upstream(&mock_server, Some("test-key"));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["commonPlants"].as_array().unwrap().len(), 2);
    assert_eq!(body["commonPlants"][0]["name"], "Malus domestica");
    assert_eq!(body["commonPlants"][1]["genus"], "Prunus");
    assert_eq!(body["growingSeason"], "Typically April to October");

    let requests = mock_server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["latitude"], 45.0);
    assert_eq!(sent["longitude"], -93.0);
    assert_eq!(sent["similar_images"], true);
    assert_eq!(
        sent["images"],
        json!([application::DEFAULT_REFERENCE_IMAGE_URL])
    );
}

#[tokio::test]
async fn full_stack_truncates_to_five() {
    let mock_server = MockServer::start().await;

    let suggestions = (1..=7)
        .map(|i| suggestion(&format!("Species {i}"), "Family", "Genus"))
        .collect();
    Mock::given(method("POST"))
        .and(path("/api/v3/identification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identification_body(suggestions)))
        .mount(&mock_server)
        .await;

    let server = server_with_upstream(&mock_server, Some("test-key"));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": -20.0, "longitude": 140.0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let plants = body["commonPlants"].as_array().unwrap();
    assert_eq!(plants.len(), 5);
    assert_eq!(plants[4]["name"], "Species 5");
}

#[tokio::test]
async fn full_stack_ignores_malformed_suggestion_past_fifth() {
    let mock_server = MockServer::start().await;

    let mut suggestions: Vec<Value> = (1..=5)
        .map(|i| suggestion(&format!("Species {i}"), "Family", "Genus"))
        .collect();
    suggestions.push(json!({"name": "f"}));
    Mock::given(method("POST"))
        .and(path("/api/v3/identification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identification_body(suggestions)))
        .mount(&mock_server)
        .await;

    let server = server_with_upstream(&mock_server, Some("test-key"));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["commonPlants"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn full_stack_upstream_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/identification"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let server = server_with_upstream(&mock_server, Some("test-key"));

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Plant.id API error: 503"));
}

#[tokio::test]
async fn full_stack_missing_api_key_never_calls_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let server = server_with_upstream(&mock_server, None);

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"error": "Plant.id API key is not set in environment variables"})
    );
}

#[tokio::test]
async fn full_stack_validation_precedes_key_check() {
    let mock_server = MockServer::start().await;
    let server = server_with_upstream(&mock_server, None);

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"longitude": -93.0}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn full_stack_unreachable_upstream() {
    let mock_server = MockServer::start().await;
    let server = server_with_upstream(&mock_server, Some("test-key"));
    drop(mock_server);

    let response = server
        .post("/api/plantDetail")
        .json(&json!({"latitude": 45.0, "longitude": -93.0}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "No response received from Plant.id API");
}
