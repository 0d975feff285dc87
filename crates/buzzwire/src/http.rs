//! Advisory HTTP pre-validation surface.
//!
//! `POST /create` and `POST /join` let the lobby reject a taken room or
//! player name before the client opens its real-time connection. The
//! checks are advisory only: between a 200 here and the real-time event
//! another client may win the race, so the hub enforces uniqueness again
//! at join time.
//!
//! Reason strings are fixed; lobby clients display them verbatim.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use buzzwire_protocol::PlayerRef;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::hub::SharedHub;

#[derive(Debug, Deserialize)]
struct CreateRequest {
    room: String,
}

#[derive(Debug, Deserialize)]
struct JoinRequest {
    player: PlayerRef,
}

/// Builds the router backed by the shared hub.
pub(crate) fn router(hub: SharedHub) -> Router {
    Router::new()
        .route("/create", post(create))
        .route("/join", post(join))
        .layer(CorsLayer::permissive())
        .with_state(hub)
}

async fn create(
    State(hub): State<SharedHub>,
    Json(req): Json<CreateRequest>,
) -> (StatusCode, &'static str) {
    if hub.lock().await.room_exists(&req.room) {
        return (StatusCode::BAD_REQUEST, "Room already exists");
    }
    (StatusCode::OK, "")
}

async fn join(
    State(hub): State<SharedHub>,
    Json(req): Json<JoinRequest>,
) -> (StatusCode, &'static str) {
    let hub = hub.lock().await;
    if !hub.room_exists(&req.player.room) {
        return (StatusCode::BAD_REQUEST, "Room does not exists");
    }
    if hub.player_name_taken(&req.player.name) {
        return (StatusCode::BAD_REQUEST, "Player already exists");
    }
    (StatusCode::OK, "")
}
