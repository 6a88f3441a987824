use sea_orm::DatabaseConnection;

use crate::infra::db::{DbCharacterRepository, DbSpeciesRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn species_repo(&self) -> DbSpeciesRepository {
        DbSpeciesRepository {
            db: self.db.clone(),
        }
    }

    pub fn character_repo(&self) -> DbCharacterRepository {
        DbCharacterRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
