use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Species with id {0} not found.")]
    SpeciesNotFound(i32),
    #[error("Character with id {0} not found.")]
    CharacterNotFound(i32),
    #[error("Character already exists")]
    CharacterDuplication,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("No active account found with the given credentials")]
    InvalidCredentials,
    #[error("Unauthorized")]
    InvalidToken,
    #[error("limit must be greater than zero")]
    InvalidLimit,
    #[error("Something went wrong")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SpeciesNotFound(_) => "SPECIES_NOT_FOUND",
            Self::CharacterNotFound(_) => "CHARACTER_NOT_FOUND",
            Self::CharacterDuplication => "CHARACTER_DUPLICATION",
            Self::UsernameTaken => "USER_DUPLICATION",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidLimit => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::SpeciesNotFound(_) | Self::CharacterNotFound(_) => StatusCode::NOT_FOUND,
            Self::CharacterDuplication | Self::UsernameTaken | Self::InvalidLimit => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors. The response masks the
        // underlying cause, so the anyhow chain must be logged here or it is lost.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL_SERVER_ERROR", "internal error");
        }
        let body = serde_json::json!({
            "message": self.to_string(),
            "status": status.as_u16(),
            "type": self.kind(),
        });
        (status, axum::Json(body)).into_response()
    }
}
