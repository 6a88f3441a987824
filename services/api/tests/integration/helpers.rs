use std::sync::{Arc, Mutex};

use chrono::Utc;

use pokedex_api::domain::repository::{CharacterRepository, SpeciesRepository, UserRepository};
use pokedex_api::domain::types::{Character, NewUser, Species, SpeciesKind, User};
use pokedex_api::error::ApiError;
use pokedex_api::usecase::user::hash_password;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests";

// ── Species repository (in-memory) ───────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemSpeciesRepo {
    rows: Arc<Mutex<Vec<Species>>>,
}

impl InMemSpeciesRepo {
    pub fn new(rows: Vec<Species>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl SpeciesRepository for InMemSpeciesRepo {
    async fn list(&self) -> Result<Vec<Species>, ApiError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|s| s.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Species>, ApiError> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Species>, ApiError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == name)
            .cloned())
    }

    async fn create(&self, name: &str, kind: SpeciesKind) -> Result<Species, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let species = Species {
            id,
            name: name.to_owned(),
            kind,
            created_at: Utc::now(),
        };
        rows.push(species.clone());
        Ok(species)
    }
}

pub fn species(id: i32, kind: SpeciesKind) -> Species {
    Species {
        id,
        name: kind.label().to_owned(),
        kind,
        created_at: Utc::now(),
    }
}

// ── Character repository (in-memory) ─────────────────────────────────────────

/// Mirrors the store's contract: unique names surface as
/// `CharacterDuplication`, ids are assigned ascending.
#[derive(Clone, Default)]
pub struct InMemCharacterRepo {
    rows: Arc<Mutex<Vec<Character>>>,
}

impl InMemCharacterRepo {
    pub fn new(rows: Vec<Character>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i32) -> Option<Character> {
        self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }
}

impl CharacterRepository for InMemCharacterRepo {
    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Character>, ApiError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|c| c.id);
        Ok(rows
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError> {
        Ok(self.get(id))
    }

    async fn create(
        &self,
        name: &str,
        strength: i32,
        species_id: i32,
    ) -> Result<Character, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|c| c.name == name) {
            return Err(ApiError::CharacterDuplication);
        }
        let id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let character = Character {
            id,
            name: name.to_owned(),
            strength,
            species_id,
        };
        rows.push(character.clone());
        Ok(character)
    }

    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        strength: Option<i32>,
    ) -> Result<(), ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(new_name) = name {
            if rows.iter().any(|c| c.name == new_name && c.id != id) {
                return Err(ApiError::CharacterDuplication);
            }
        }
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::CharacterNotFound(id))?;
        if let Some(new_name) = name {
            row.name = new_name.to_owned();
        }
        if let Some(new_strength) = strength {
            row.strength = new_strength;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }
}

pub fn character(id: i32, name: &str, strength: i32, species_id: i32) -> Character {
    Character {
        id,
        name: name.to_owned(),
        strength,
        species_id,
    }
}

// ── User repository (in-memory) ──────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemUserRepo {
    rows: Arc<Mutex<Vec<User>>>,
}

impl InMemUserRepo {
    pub fn new(rows: Vec<User>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }
}

impl UserRepository for InMemUserRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_username_ci(&self, username: &str) -> Result<Option<User>, ApiError> {
        let needle = username.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username.to_lowercase() == needle)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<(), ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        rows.push(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }
}

pub fn user_with_password(id: i32, username: &str, password: &str) -> User {
    User {
        id,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: "Ash".to_owned(),
        last_name: "Ketchum".to_owned(),
        password_hash: hash_password(password).unwrap(),
        created_at: Utc::now(),
    }
}
