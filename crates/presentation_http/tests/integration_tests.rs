//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::{sync::Arc, time::Duration};

use application::{
    PageConfig,
    error::ApplicationError,
    ports::{
        DirectionsReply, DirectionsStatus, PlaceDetails, PlaceSuggestion, PlaceSuggestionPort,
        RouteRequest, RoutingPort,
    },
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::{BoundingBox, Distance, GeoLocation, RouteLeg, RoutePath, TravelTime};
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Directions provider answering from the origin text
struct MockRouting {
    healthy: bool,
}

fn clock_tower() -> GeoLocation {
    GeoLocation::new(30.3244, 78.0418).expect("valid location")
}

fn fri() -> GeoLocation {
    GeoLocation::new(30.3415, 77.9993).expect("valid location")
}

fn route_path() -> RoutePath {
    RoutePath {
        summary: "Chakrata Rd".to_string(),
        legs: vec![RouteLeg {
            distance: Distance {
                text: "7.2 km".to_string(),
                meters: 7200,
            },
            duration: TravelTime {
                text: "18 mins".to_string(),
                seconds: 1080,
            },
            start_location: clock_tower(),
            end_location: fri(),
            start_address: "Clock Tower, Dehradun, Uttarakhand, India".to_string(),
            end_address: "Forest Research Institute, Dehradun, Uttarakhand, India".to_string(),
        }],
        path: vec![clock_tower(), fri()],
        bounds: Some(BoundingBox::new(clock_tower(), fri()).expect("valid bounds")),
    }
}

#[async_trait]
impl RoutingPort for MockRouting {
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsReply, ApplicationError> {
        match request.origin.as_str() {
            "Atlantis" => Ok(DirectionsReply::status_only(DirectionsStatus::ZeroResults)),
            "Denied" => Ok(DirectionsReply {
                status: DirectionsStatus::Other("REQUEST_DENIED".to_string()),
                error_message: Some("The provided API key is invalid.".to_string()),
                routes: Vec::new(),
            }),
            "Offline" => Err(ApplicationError::ExternalService(
                "Directions request failed: connection refused".to_string(),
            )),
            _ => Ok(DirectionsReply {
                status: DirectionsStatus::Ok,
                error_message: None,
                routes: vec![route_path()],
            }),
        }
    }

    async fn is_available(&self) -> bool {
        self.healthy
    }
}

/// Places provider with a single known place
struct MockPlaces;

#[async_trait]
impl PlaceSuggestionPort for MockPlaces {
    async fn suggest(
        &self,
        query: &application::ports::SuggestionQuery,
    ) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        if "clock tower".starts_with(&query.input.to_lowercase()) {
            Ok(vec![PlaceSuggestion {
                place_id: "clock-tower".to_string(),
                description: "Clock Tower, Dehradun, Uttarakhand, India".to_string(),
            }])
        } else {
            Ok(Vec::new())
        }
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError> {
        match place_id {
            "clock-tower" => Ok(PlaceDetails {
                place_id: place_id.to_string(),
                formatted_address: Some("Clock Tower, Dehradun, Uttarakhand 248001, India".to_string()),
                location: Some(clock_tower()),
            }),
            other => Err(ApplicationError::NotFound(format!("Place {other}"))),
        }
    }
}

fn create_test_server_with(healthy: bool) -> TestServer {
    let state = AppState::new(
        Arc::new(MockRouting { healthy }),
        Arc::new(MockPlaces),
        PageConfig::default(),
    );
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_test_server_with(true)
}

async fn open_session(server: &TestServer) -> String {
    let response = server.post("/v1/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().expect("session id").to_string()
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_returns_ready_when_healthy() {
    let server = create_test_server();
    open_session(&server).await;

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["directions"]["healthy"], true);
    assert_eq!(body["sessions"], 1);
}

#[tokio::test]
async fn readiness_endpoint_returns_unavailable_when_unhealthy() {
    let server = create_test_server_with(false);

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: Value = response.json();
    assert_eq!(body["ready"], false);
}

// ============ Page Tests ============

#[tokio::test]
async fn index_serves_route_page() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"id="start""#));
    assert!(html.contains(r#"id="end""#));
    assert!(html.contains(r#"id="map""#));
    // route pins show their A/B label on the icon itself
    assert!(html.contains("L.divIcon("));
    assert!(html.contains(r#"className: "route-marker""#));
    assert!(html.contains("html: marker.label"));
}

// ============ Session Tests ============

#[tokio::test]
async fn new_session_starts_on_dehradun() {
    let server = create_test_server();

    let response = server.post("/v1/sessions").await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let snapshot = &body["snapshot"];
    assert_eq!(snapshot["map"]["container"], "map");
    assert_eq!(snapshot["map"]["zoom"], 13);
    assert_eq!(snapshot["map"]["center"]["latitude"], 30.3256);
    assert_eq!(snapshot["map"]["center"]["longitude"], 78.0419);
    assert!(snapshot["map"]["route"].is_null());
    assert_eq!(snapshot["inputs"]["start"], "");
    assert_eq!(snapshot["ui"]["loading"], false);
    assert!(snapshot["ui"]["result"].is_null());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let server = create_test_server();
    let id = uuid::Uuid::new_v4();

    let response = server.get(&format!("/v1/sessions/{id}")).await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "not_found");

    server
        .get(&format!("/v1/sessions/{id}/events"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let server = create_test_server();
    let id = open_session(&server).await;

    server
        .delete(&format!("/v1/sessions/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/v1/sessions/{id}"))
        .await
        .assert_status_not_found();
    server
        .delete(&format!("/v1/sessions/{id}"))
        .await
        .assert_status_not_found();
}

// ============ Event Stream Tests ============

/// Snapshot payloads carried by `snapshot` events in an SSE body
fn snapshot_events(body: &str) -> Vec<Value> {
    body.split("\n\n")
        .filter(|frame| frame.lines().any(|line| line == "event: snapshot"))
        .filter_map(|frame| {
            let data: String = frame
                .lines()
                .filter_map(|line| line.strip_prefix("data: "))
                .collect();
            serde_json::from_str(&data).ok()
        })
        .collect()
}

#[tokio::test]
async fn events_stream_follows_page_until_session_is_deleted() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let events = async { server.get(&format!("/v1/sessions/{id}/events")).await };
    let interactions = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        server
            .put(&format!("/v1/sessions/{id}/inputs/start"))
            .json(&json!({ "text": "Clock Tower" }))
            .await
            .assert_status_ok();
        tokio::time::sleep(Duration::from_millis(100)).await;
        server
            .delete(&format!("/v1/sessions/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    };

    let (response, ()) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(events, interactions)
    })
    .await
    .expect("event stream should end once the session is deleted");

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let snapshots = snapshot_events(&response.text());
    assert!(snapshots.len() >= 2, "got {} snapshot events", snapshots.len());
    assert_eq!(snapshots[0]["inputs"]["start"], "");
    assert_eq!(snapshots[0]["map"]["zoom"], 13);
    assert!(snapshots[1..].iter().any(|s| s["inputs"]["start"] == "Clock Tower"));
}

#[tokio::test]
async fn events_for_unknown_session_are_not_found() {
    let server = create_test_server();
    let id = uuid::Uuid::new_v4();

    let response = server.get(&format!("/v1/sessions/{id}/events")).await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "not_found");
}

// ============ Input Tests ============

#[tokio::test]
async fn typed_text_appears_in_snapshot() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .put(&format!("/v1/sessions/{id}/inputs/end"))
        .json(&json!({ "text": "FRI Dehradun" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["inputs"]["end"], "FRI Dehradun");
    assert_eq!(body["inputs"]["start"], "");
}

#[tokio::test]
async fn unknown_input_field_is_bad_request() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .put(&format!("/v1/sessions/{id}/inputs/via"))
        .json(&json!({ "text": "x" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn suggestions_for_typed_prefix() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .get(&format!("/v1/sessions/{id}/inputs/start/suggestions"))
        .add_query_param("q", "Clock")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["suggestions"][0]["place_id"], "clock-tower");

    let blank = server
        .get(&format!("/v1/sessions/{id}/inputs/start/suggestions"))
        .add_query_param("q", "   ")
        .await;
    let body: Value = blank.json();
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn selecting_a_suggestion_fills_the_input() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/inputs/start/select"))
        .json(&json!({ "place_id": "clock-tower" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["snapshot"]["inputs"]["start"],
        "Clock Tower, Dehradun, Uttarakhand 248001, India"
    );
    assert_eq!(body["place"]["location"]["latitude"], 30.3244);
}

#[tokio::test]
async fn selecting_an_unknown_place_is_not_found() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/inputs/end/select"))
        .json(&json!({ "place_id": "nowhere" }))
        .await;

    response.assert_status_not_found();
}

// ============ Route Tests ============

#[tokio::test]
async fn route_found_draws_route_and_shows_summary() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Clock Tower, Dehradun", "end": "FRI Dehradun" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "found");
    assert_eq!(body["result"]["distance"]["text"], "7.2 km");

    let snapshot = &body["snapshot"];
    assert_eq!(snapshot["ui"]["result"]["distance_text"], "7.2 km");
    assert_eq!(snapshot["ui"]["result"]["duration_text"], "18 mins");
    assert_eq!(snapshot["ui"]["loading"], false);
    assert!(snapshot["ui"]["error_message"].is_null());
    assert_eq!(snapshot["map"]["route"]["path"].as_array().unwrap().len(), 2);

    let markers = snapshot["map"]["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0]["label"], "A");
    assert_eq!(markers[0]["tooltip"], "Clock Tower, Dehradun, Uttarakhand, India");
    assert_eq!(markers[1]["label"], "B");
}

#[tokio::test]
async fn route_uses_previously_typed_inputs() {
    let server = create_test_server();
    let id = open_session(&server).await;

    for (field, text) in [("start", "Clock Tower"), ("end", "FRI")] {
        server
            .put(&format!("/v1/sessions/{id}/inputs/{field}"))
            .json(&json!({ "text": text }))
            .await
            .assert_status_ok();
    }

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({}))
        .await;

    let body: Value = response.json();
    assert_eq!(body["outcome"], "found");
}

#[tokio::test]
async fn blank_inputs_report_empty_input() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Clock Tower", "end": "  " }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "empty_input");
    assert_eq!(body["message"], "Please enter both start and end locations.");
    assert_eq!(
        body["snapshot"]["ui"]["error_message"],
        "Please enter both start and end locations."
    );
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn zero_results_report_no_route() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Atlantis", "end": "FRI" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["outcome"], "no_route");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("No route found between these locations.")
    );
    assert!(body["snapshot"]["map"]["route"].is_null());
}

#[tokio::test]
async fn provider_failure_reports_status_and_hides_previous_result() {
    let server = create_test_server();
    let id = open_session(&server).await;

    server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Clock Tower", "end": "FRI" }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Denied" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["outcome"], "failed");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("REQUEST_DENIED"));
    assert!(message.contains("API key"));

    let snapshot = &body["snapshot"];
    assert!(snapshot["ui"]["result"].is_null());
    assert!(snapshot["map"]["route"].is_null());
    assert_eq!(snapshot["map"]["markers"], json!([]));
}

#[tokio::test]
async fn transport_failure_reports_failed() {
    let server = create_test_server();
    let id = open_session(&server).await;

    let response = server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({ "start": "Offline", "end": "FRI" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["outcome"], "failed");
    assert!(body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn route_for_unknown_session_is_not_found() {
    let server = create_test_server();
    let id = uuid::Uuid::new_v4();

    server
        .post(&format!("/v1/sessions/{id}/route"))
        .json(&json!({}))
        .await
        .assert_status_not_found();
}
