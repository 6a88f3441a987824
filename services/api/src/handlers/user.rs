use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(CreateUserInput {
            first_name: body.first_name,
            last_name: body.last_name,
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
