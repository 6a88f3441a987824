use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::handlers::{
    auth::login,
    character::{
        create_character, delete_character, get_character_by_id, get_characters, update_character,
    },
    species::{get_species, get_species_by_id},
    user::create_user,
};
use crate::state::AppState;

/// Handler for `GET /healthz` — liveness check.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
async fn readyz() -> StatusCode {
    StatusCode::OK
}

#[derive(Clone, Default)]
struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Composition root — every route is registered here once at startup.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Species
        .route("/species", get(get_species))
        .route("/species/{id}", get(get_species_by_id))
        // Characters
        .route("/characters", get(get_characters))
        .route("/characters", post(create_character))
        .route("/characters/{id}", get(get_character_by_id))
        .route("/characters/{id}", patch(update_character))
        .route("/characters/{id}", delete(delete_character))
        // Users
        .route("/users", post(create_user))
        // Auth
        .route("/auth/login", post(login))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            MakeUuidRequestId,
        ))
        .with_state(state)
}
