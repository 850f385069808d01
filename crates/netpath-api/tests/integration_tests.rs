//! # Integration Tests for netpath-api
//!
//! Drives the full router: banner and health probes, map data, path
//! queries for every outcome class, malformed bodies, and the OpenAPI
//! document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use netpath_api::config::AppConfig;
use netpath_api::state::AppState;
use netpath_topology::TopologyStore;

const GATEWAY: &str = "1.99.185.142";

/// Helper: a small topology with a reachable chain, an island, a
/// destination-only node, and a malformed row.
fn test_topology() -> TopologyStore {
    TopologyStore::build(vec![
        vec!["10.0.0.1", "10.0.0.2", "1.0", "2.0", "4", "CityA"],
        vec!["10.0.0.2", GATEWAY, "3.0", "4.0", "6", "Gateway"],
        vec!["10.0.0.1", GATEWAY, "1.0", "2.0", "not-a-cost", "CityA"],
        vec!["10.9.0.1", "10.9.0.2", "7.0", "8.0", "1", "Island"],
        vec!["10.0.0.5", "10.0.0.6", "9.0", "9.0", "2"],
        vec!["10.0.0.6", GATEWAY, "9.5", "9.5", "3", "Edge"],
        vec!["10.0.0.7", "10.0.0.5", "1.0", "1.0", "1", "Far"],
        vec![GATEWAY, "10.0.0.8", "74.3", "31.5", "1", "Core"],
    ])
}

/// Helper: build the test app with the default gateway.
fn test_app() -> axum::Router {
    test_app_with_gateway(GATEWAY)
}

fn test_app_with_gateway(gateway: &str) -> axum::Router {
    let config = AppConfig {
        gateway: gateway.into(),
        ..AppConfig::default()
    };
    netpath_api::app(AppState::new(test_topology(), config))
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn post_path(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/path")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// -- Banner & Health ----------------------------------------------------------

#[tokio::test]
async fn test_index_banner() {
    let response = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, netpath_api::BANNER);
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Map Data -----------------------------------------------------------------

#[tokio::test]
async fn test_map_data_lists_nodes_and_edges() {
    let response = test_app().oneshot(get("/map-data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(
        body["nodes"]["10.0.0.1"],
        json!({"lat": 2.0, "lng": 1.0, "city": "CityA"})
    );
    // Destination-only nodes have edges but no node entry.
    assert!(body["nodes"].get("10.9.0.2").is_none());
    assert_eq!(body["edges"]["10.9.0.2"], json!([["10.9.0.1", 1.0]]));
    // Missing city falls back to the sentinel.
    assert_eq!(body["nodes"]["10.0.0.5"]["city"], "Unknown");
    // The malformed row contributed nothing.
    assert_eq!(body["edges"]["10.0.0.1"], json!([["10.0.0.2", 4.0]]));
}

#[tokio::test]
async fn test_map_data_edges_are_symmetric() {
    let response = test_app().oneshot(get("/map-data")).await.unwrap();
    let body = body_json(response).await;
    let edges = body["edges"].as_object().unwrap();
    for (node, neighbors) in edges {
        for pair in neighbors.as_array().unwrap() {
            let other = pair[0].as_str().unwrap();
            let back = edges[other].as_array().unwrap();
            assert!(
                back.iter().any(|p| p[0] == node.as_str() && p[1] == pair[1]),
                "{node} -> {other} has no reverse entry"
            );
        }
    }
}

// -- Path Queries -------------------------------------------------------------

#[tokio::test]
async fn test_path_to_gateway() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": "10.0.0.1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([
            {"ip": "10.0.0.1", "lat": 2.0, "lng": 1.0, "city": "CityA"},
            {"ip": "10.0.0.2", "lat": 4.0, "lng": 3.0, "city": "Gateway"},
            {"ip": GATEWAY, "lat": 31.5, "lng": 74.3, "city": "Core"},
        ])
    );
}

#[tokio::test]
async fn test_path_from_gateway_is_single_node() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": GATEWAY})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["ip"], GATEWAY);
}

#[tokio::test]
async fn test_path_start_is_trimmed() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": "  10.0.0.2 "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_path_empty_start_is_validation_error() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_path_missing_start_field_is_validation_error() {
    let response = test_app().oneshot(post_path(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_path_unknown_start_is_validation_error_not_404() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": "172.16.0.1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("172.16.0.1"));
}

#[tokio::test]
async fn test_path_disconnected_start_is_not_found() {
    let response = test_app()
        .oneshot(post_path(json!({"startIP": "10.9.0.1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_path_with_uncharted_node_is_missing_coordinates() {
    // Routing to 10.9.0.2, which only ever appears as a destination.
    let response = test_app_with_gateway("10.9.0.2")
        .oneshot(post_path(json!({"startIP": "10.9.0.1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_COORDINATES");
    assert_eq!(body["error"]["details"]["nodes"], json!(["10.9.0.2"]));
}

#[tokio::test]
async fn test_path_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/path")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_path_requires_post() {
    let response = test_app().oneshot(get("/path")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_served() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/path"].is_object());
    assert!(body["paths"]["/map-data"].is_object());
}
