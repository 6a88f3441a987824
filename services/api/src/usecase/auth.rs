use chrono::{DateTime, Utc};

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiError;
use crate::token::issue_token;
use crate::usecase::user::verify_password;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
    pub token_exp_date: DateTime<Utc>,
}

/// Issue a sliding bearer token for a username/password pair. The username
/// match is exact-case; an unknown username and a wrong password are
/// indistinguishable to the caller.
pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(ApiError::InvalidCredentials);
        }

        let (token, exp) = issue_token(user.id, self.token_ttl_secs, &self.jwt_secret)?;
        let token_exp_date = DateTime::from_timestamp(exp as i64, 0)
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("token exp out of range: {exp}")))?;

        Ok(LoginOutput {
            user,
            token,
            token_exp_date,
        })
    }
}
