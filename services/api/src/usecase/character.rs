use crate::domain::repository::{CharacterRepository, SpeciesRepository};
use crate::domain::types::Character;
use crate::error::ApiError;

// ── ListCharacters ───────────────────────────────────────────────────────────

pub struct ListCharactersInput {
    pub start: u64,
    pub limit: u64,
}

pub struct CharacterPage {
    pub total_count: u64,
    pub page_number: u64,
    pub characters: Vec<Character>,
}

/// Offset-style query over a page-based fetch: the reported page number is
/// `start / limit + 1`, and the rows come from that page clamped to the last
/// non-empty one.
pub struct ListCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> ListCharactersUseCase<R> {
    pub async fn execute(&self, input: ListCharactersInput) -> Result<CharacterPage, ApiError> {
        if input.limit == 0 {
            return Err(ApiError::InvalidLimit);
        }
        let page_number = input.start / input.limit + 1;
        let total_count = self.repo.count().await?;
        let last_page = total_count.div_ceil(input.limit).max(1);
        let characters = self
            .repo
            .list_page(page_number.min(last_page), input.limit)
            .await?;
        Ok(CharacterPage {
            total_count,
            page_number,
            characters,
        })
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Character, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::CharacterNotFound(id))
    }
}

// ── CreateCharacter ──────────────────────────────────────────────────────────

pub struct CreateCharacterInput {
    pub name: String,
    pub strength: i32,
    pub species: i32,
}

pub struct CreateCharacterUseCase<C: CharacterRepository, S: SpeciesRepository> {
    pub characters: C,
    pub species: S,
}

impl<C: CharacterRepository, S: SpeciesRepository> CreateCharacterUseCase<C, S> {
    pub async fn execute(&self, input: CreateCharacterInput) -> Result<Character, ApiError> {
        let species = self
            .species
            .find_by_id(input.species)
            .await?
            .ok_or(ApiError::SpeciesNotFound(input.species))?;
        self.characters
            .create(&input.name, input.strength, species.id)
            .await
    }
}

// ── UpdateCharacter ──────────────────────────────────────────────────────────

pub struct UpdateCharacterInput {
    pub name: Option<String>,
    pub strength: Option<i32>,
}

pub struct UpdateCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> UpdateCharacterUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateCharacterInput,
    ) -> Result<Character, ApiError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::CharacterNotFound(id))?;

        // An empty name or a zero strength counts as "not provided" and
        // leaves the stored value untouched.
        let name = input.name.as_deref().filter(|n| !n.is_empty());
        let strength = input.strength.filter(|s| *s != 0);

        if name.is_none() && strength.is_none() {
            return Ok(current);
        }
        self.repo.update(id, name, strength).await?;

        Ok(Character {
            id,
            name: name.map(str::to_owned).unwrap_or(current.name),
            strength: strength.unwrap_or(current.strength),
            species_id: current.species_id,
        })
    }
}

// ── DeleteCharacter ──────────────────────────────────────────────────────────

pub struct DeleteCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> DeleteCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::CharacterNotFound(id));
        }
        Ok(())
    }
}
