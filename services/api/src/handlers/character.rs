use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::token::CurrentUser;
use crate::usecase::character::{
    CreateCharacterInput, CreateCharacterUseCase, DeleteCharacterUseCase, GetCharacterUseCase,
    ListCharactersInput, ListCharactersUseCase, UpdateCharacterInput, UpdateCharacterUseCase,
};

#[derive(Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
}

// ── GET /characters ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CharacterListQuery {
    #[serde(default)]
    pub start: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    50
}

#[derive(Serialize)]
pub struct CharacterListResponse {
    pub total_count: u64,
    pub page_number: u64,
    pub characters: Vec<CharacterResponse>,
}

pub async fn get_characters(
    _user: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<CharacterListQuery>,
) -> Result<Json<CharacterListResponse>, ApiError> {
    let usecase = ListCharactersUseCase {
        repo: state.character_repo(),
    };
    let page = usecase
        .execute(ListCharactersInput {
            start: query.start,
            limit: query.limit,
        })
        .await?;
    Ok(Json(CharacterListResponse {
        total_count: page.total_count,
        page_number: page.page_number,
        characters: page
            .characters
            .into_iter()
            .map(|c| CharacterResponse {
                id: c.id,
                name: c.name,
            })
            .collect(),
    }))
}

// ── GET /characters/{id} ─────────────────────────────────────────────────────

pub async fn get_character_by_id(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase.execute(id).await?;
    Ok(Json(CharacterResponse {
        id: character.id,
        name: character.name,
    }))
}

// ── POST /characters ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub strength: i32,
    /// Species id the character belongs to.
    pub species: i32,
}

pub async fn create_character(
    _user: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = CreateCharacterUseCase {
        characters: state.character_repo(),
        species: state.species_repo(),
    };
    let character = usecase
        .execute(CreateCharacterInput {
            name: body.name,
            strength: body.strength,
            species: body.species,
        })
        .await?;
    Ok(Json(CharacterResponse {
        id: character.id,
        name: character.name,
    }))
}

// ── PATCH /characters/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub strength: Option<i32>,
}

pub async fn update_character(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = UpdateCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase
        .execute(
            id,
            UpdateCharacterInput {
                name: body.name,
                strength: body.strength,
            },
        )
        .await?;
    Ok(Json(CharacterResponse {
        id: character.id,
        name: character.name,
    }))
}

// ── DELETE /characters/{id} ──────────────────────────────────────────────────

pub async fn delete_character(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteCharacterUseCase {
        repo: state.character_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
