//! Bearer-token issuance and validation.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims for the sliding bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a token for a user. Returns the encoded token and its `exp` claim.
pub fn issue_token(user_id: i32, ttl_secs: u64, secret: &str) -> Result<(String, u64), ApiError> {
    let exp = now_secs() + ttl_secs;
    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate a token (signature + expiry) and return its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, ApiError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ApiError::InvalidToken)?;

    Ok(data.claims)
}

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
///
/// Rejects with 401 before the handler body runs, so unauthenticated
/// requests never reach persistence.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let bearer = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);
        let secret = state.jwt_secret.clone();

        async move {
            let token = bearer.ok_or(ApiError::InvalidToken)?;
            let claims = validate_token(&token, &secret)?;
            let user_id = claims
                .sub
                .parse::<i32>()
                .map_err(|_| ApiError::InvalidToken)?;
            Ok(Self { user_id })
        }
    }
}
