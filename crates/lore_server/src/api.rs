//! Routes and handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use lore_actions::{ActionOutcome, Explorer, FailureKind, SaveResult};
use lore_core::{Coordinates, SavedLocation};
use serde_json::json;
use tracing::{debug, instrument};

use crate::{CoordinatesBody, ErrorBody, LocationBody, SaveResponse, StoryResponse};

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    explorer: Arc<Explorer>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(explorer: Arc<Explorer>) -> Self {
        Self { explorer }
    }
}

/// Build the API router.
///
/// | method | path              | body                      |
/// |--------|-------------------|---------------------------|
/// | GET    | `/health`         |                           |
/// | GET    | `/api/locations`  |                           |
/// | POST   | `/api/story`      | `{location}`              |
/// | POST   | `/api/story/here` | `{latitude, longitude}`   |
/// | POST   | `/api/locations`  | `{location}`              |
pub fn create_router(explorer: Arc<Explorer>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/locations", get(list_locations).post(save_location))
        .route("/api/story", post(generate_story))
        .route("/api/story/here", post(generate_here))
        .with_state(ApiState::new(explorer))
}

/// HTTP status for a failure kind.
pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::Busy => StatusCode::CONFLICT,
        FailureKind::Generation => StatusCode::BAD_GATEWAY,
        FailureKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn failure(kind: FailureKind, message: String) -> Response {
    (status_for(kind), Json(ErrorBody { error: message })).into_response()
}

async fn health_check(State(state): State<ApiState>) -> impl IntoResponse {
    let store = state.explorer.actions().store().backend_name();
    (StatusCode::OK, Json(json!({"status": "ok", "store": store})))
}

/// Reads the store directly; the session's cached list is left alone.
#[instrument(skip(state))]
async fn list_locations(State(state): State<ApiState>) -> Json<Vec<SavedLocation>> {
    let locations = state.explorer.actions().list_locations().await;
    debug!(count = locations.len(), "Listing saved locations");
    Json(locations)
}

#[instrument(skip(state, body), fields(location = %body.location))]
async fn generate_story(State(state): State<ApiState>, Json(body): Json<LocationBody>) -> Response {
    match state.explorer.generate(&body.location).await {
        ActionOutcome::Success(story) => {
            Json(StoryResponse::new(body.location, story)).into_response()
        }
        ActionOutcome::Failure { kind, message } => failure(kind, message),
    }
}

#[instrument(skip(state))]
async fn generate_here(
    State(state): State<ApiState>,
    Json(body): Json<CoordinatesBody>,
) -> Response {
    // Taken from the request: the session's current location may already
    // belong to a later request by the time this one responds.
    let location = match Coordinates::new(body.latitude, body.longitude) {
        Ok(coordinates) => coordinates.to_query().into_inner(),
        Err(e) => return failure(FailureKind::Validation, e.message),
    };

    match state
        .explorer
        .generate_here(body.latitude, body.longitude)
        .await
    {
        ActionOutcome::Success(story) => Json(StoryResponse::new(location, story)).into_response(),
        ActionOutcome::Failure { kind, message } => failure(kind, message),
    }
}

#[instrument(skip(state, body), fields(location = %body.location))]
async fn save_location(State(state): State<ApiState>, Json(body): Json<LocationBody>) -> Response {
    match state.explorer.save(&body.location).await {
        ActionOutcome::Success(SaveResult::Saved(location)) => (
            StatusCode::CREATED,
            Json(SaveResponse {
                location,
                already_saved: false,
            }),
        )
            .into_response(),
        ActionOutcome::Success(SaveResult::AlreadySaved(location)) => Json(SaveResponse {
            location,
            already_saved: true,
        })
        .into_response(),
        ActionOutcome::Failure { kind, message } => failure(kind, message),
    }
}
