#![allow(async_fn_in_trait)]

use crate::domain::types::{Character, NewUser, Species, SpeciesKind, User};
use crate::error::ApiError;

/// Repository for the species taxonomy.
pub trait SpeciesRepository: Send + Sync {
    /// All species ordered by id ascending.
    async fn list(&self) -> Result<Vec<Species>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Species>, ApiError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Species>, ApiError>;
    async fn create(&self, name: &str, kind: SpeciesKind) -> Result<Species, ApiError>;
}

/// Repository for characters.
pub trait CharacterRepository: Send + Sync {
    async fn count(&self) -> Result<u64, ApiError>;
    /// One page of characters ordered by id ascending. `page` is 1-based.
    async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Character>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError>;
    /// Insert a character. A duplicate name maps to `CharacterDuplication`.
    async fn create(
        &self,
        name: &str,
        strength: i32,
        species_id: i32,
    ) -> Result<Character, ApiError>;
    /// Partial update; `None` fields are left untouched. At least one field
    /// must be `Some`.
    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        strength: Option<i32>,
    ) -> Result<(), ApiError>;
    /// Delete a character. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    /// Exact-case username match (login path).
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
    /// Case-insensitive username match (registration uniqueness check).
    async fn find_by_username_ci(&self, username: &str) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &NewUser) -> Result<(), ApiError>;
}
