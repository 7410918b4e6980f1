//! HTTP handler tests.

mod test_utils;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lore_database::LocationStore;
use lore_server::create_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value)?)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body)?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

#[tokio::test]
async fn health_reports_store_backend() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    Ok(())
}

#[tokio::test]
async fn story_round_trip() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());
    let (status, body) = send(&app, "POST", "/api/story", Some(json!({"location": "Petra"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Petra");
    assert_eq!(body["title"], "Stone and Sand");
    Ok(())
}

#[tokio::test]
async fn empty_location_is_bad_request() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());
    let (status, body) = send(&app, "POST", "/api/story", Some(json!({"location": ""}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a location.");

    let (status, body) = send(&app, "POST", "/api/locations", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid location to save.");
    Ok(())
}

#[tokio::test]
async fn generation_failure_is_bad_gateway() -> anyhow::Result<()> {
    let store = LocationStore::unconfigured();
    let app = create_router(test_utils::explorer(true, store));
    let (status, body) = send(&app, "POST", "/api/story", Some(json!({"location": "Petra"}))).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to generate story. Please try again.");
    Ok(())
}

#[tokio::test]
async fn coordinates_generate_for_formatted_location() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());
    let (status, body) = send(
        &app,
        "POST",
        "/api/story/here",
        Some(json!({"latitude": 48.85837, "longitude": 2.29448})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "48.8584, 2.2945");

    let (status, _) = send(
        &app,
        "POST",
        "/api/story/here",
        Some(json!({"latitude": 91.0, "longitude": 0.0})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn save_then_list_then_duplicate() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());

    let (status, body) = send(&app, "POST", "/api/locations", Some(json!({"location": "Petra"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["alreadySaved"], false);
    assert_eq!(body["location"]["name"], "Petra");
    assert!(body["location"]["createdAt"].is_string());

    let (status, body) = send(&app, "GET", "/api/locations", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["summary"], "Nabataean city carved into sandstone.");

    let (status, body) = send(&app, "POST", "/api/locations", Some(json!({"location": "Petra"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alreadySaved"], true);
    Ok(())
}

#[tokio::test]
async fn unconfigured_store_lists_empty_and_refuses_saves() -> anyhow::Result<()> {
    let app = create_router(test_utils::explorer(false, LocationStore::unconfigured()));

    let (status, body) = send(&app, "GET", "/api/locations", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "POST", "/api/locations", Some(json!({"location": "Petra"}))).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["error"],
        "Failed to save location. Please make sure the location store is configured correctly."
    );
    Ok(())
}

#[test]
fn every_failure_kind_has_a_status() {
    use lore_actions::FailureKind;
    use lore_server::status_for;

    assert_eq!(status_for(FailureKind::Validation), StatusCode::BAD_REQUEST);
    assert_eq!(status_for(FailureKind::Busy), StatusCode::CONFLICT);
    assert_eq!(status_for(FailureKind::Generation), StatusCode::BAD_GATEWAY);
    assert_eq!(status_for(FailureKind::StoreUnavailable), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn listing_reads_the_store_without_touching_the_session() -> anyhow::Result<()> {
    use lore_database::InMemoryLocationRepository;
    use lore_interface::LocationRepository;
    use std::sync::Arc;

    let repository = InMemoryLocationRepository::new();
    let explorer = test_utils::explorer(false, LocationStore::new(Arc::new(repository.clone())));
    let app = create_router(explorer.clone());

    repository.insert("Angkor Wat", "Temple complex in Siem Reap.").await?;

    let (status, body) = send(&app, "GET", "/api/locations", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Angkor Wat");
    assert!(explorer.saved().await.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn coordinate_story_keeps_its_own_location_under_contention() -> anyhow::Result<()> {
    let app = create_router(test_utils::memory_explorer());

    for _ in 0..25 {
        let here = send(
            &app,
            "POST",
            "/api/story/here",
            Some(json!({"latitude": 34.6851, "longitude": 135.8048})),
        );
        let named = send(&app, "POST", "/api/story", Some(json!({"location": "Nara"})));
        let (here, named) = tokio::join!(here, named);

        let (status, body) = here?;
        if status == StatusCode::OK {
            assert_eq!(body["location"], "34.6851, 135.8048");
        }
        let (status, body) = named?;
        if status == StatusCode::OK {
            assert_eq!(body["location"], "Nara");
        }
    }
    Ok(())
}
