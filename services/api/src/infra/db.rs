use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    sea_query::{Expr, Func},
};

use pokedex_api_schema::{characters, species, users};

use crate::domain::repository::{CharacterRepository, SpeciesRepository, UserRepository};
use crate::domain::types::{Character, NewUser, Species, SpeciesKind, User};
use crate::error::ApiError;

// ── Species repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSpeciesRepository {
    pub db: DatabaseConnection,
}

impl SpeciesRepository for DbSpeciesRepository {
    async fn list(&self) -> Result<Vec<Species>, ApiError> {
        let models = species::Entity::find()
            .order_by_asc(species::Column::Id)
            .all(&self.db)
            .await
            .context("list species")?;
        models.into_iter().map(species_from_model).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Species>, ApiError> {
        let model = species::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find species by id")?;
        model.map(species_from_model).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Species>, ApiError> {
        let model = species::Entity::find()
            .filter(species::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find species by name")?;
        model.map(species_from_model).transpose()
    }

    async fn create(&self, name: &str, kind: SpeciesKind) -> Result<Species, ApiError> {
        let model = species::ActiveModel {
            name: Set(name.to_owned()),
            value: Set(kind.code().to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create species")?;
        species_from_model(model)
    }
}

/// A code outside the closed taxonomy can only mean a corrupted row.
fn species_from_model(model: species::Model) -> Result<Species, ApiError> {
    let kind = SpeciesKind::from_code(&model.value).ok_or_else(|| {
        ApiError::Internal(anyhow::anyhow!(
            "unknown species code {:?} for id {}",
            model.value,
            model.id
        ))
    })?;
    Ok(Species {
        id: model.id,
        name: model.name,
        kind,
        created_at: model.created_at,
    })
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn count(&self) -> Result<u64, ApiError> {
        let total = characters::Entity::find()
            .count(&self.db)
            .await
            .context("count characters")?;
        Ok(total)
    }

    async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Character>, ApiError> {
        let models = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await
            .context("list characters page")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn create(
        &self,
        name: &str,
        strength: i32,
        species_id: i32,
    ) -> Result<Character, ApiError> {
        let model = characters::ActiveModel {
            name: Set(name.to_owned()),
            strength: Set(strength),
            species_id: Set(species_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::CharacterDuplication,
            _ => ApiError::Internal(anyhow::Error::new(e).context("create character")),
        })?;
        Ok(character_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        strength: Option<i32>,
    ) -> Result<(), ApiError> {
        let mut am = characters::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_name) = name {
            am.name = Set(new_name.to_owned());
        }
        if let Some(new_strength) = strength {
            am.strength = Set(new_strength);
        }
        am.update(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::CharacterDuplication,
            _ => ApiError::Internal(anyhow::Error::new(e).context("update character")),
        })?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = characters::Entity::delete_many()
            .filter(characters::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete character")?;
        Ok(result.rows_affected > 0)
    }
}

fn character_from_model(model: characters::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
        strength: model.strength,
        species_id: model.species_id,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username_ci(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(users::Column::Username)))
                    .eq(username.to_lowercase()),
            )
            .one(&self.db)
            .await
            .context("find user by username (case-insensitive)")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<(), ApiError> {
        users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}
