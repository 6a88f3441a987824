use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::repository::UserRepository;
use crate::domain::types::NewUser;
use crate::error::ApiError;

/// Hash a password into an Argon2id PHC string for storage.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("hash password: {e}")))
}

/// Check a password against a stored PHC string. A malformed hash counts as
/// a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<(), ApiError> {
        // Uniqueness is case-insensitive: "Ash" and "ash" are the same account.
        if self
            .repo
            .find_by_username_ci(&input.username)
            .await?
            .is_some()
        {
            return Err(ApiError::UsernameTaken);
        }
        let password_hash = hash_password(&input.password)?;
        self.repo
            .create(&NewUser {
                username: input.username,
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                password_hash,
            })
            .await
    }
}
