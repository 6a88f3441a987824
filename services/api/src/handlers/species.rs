use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::species::{GetSpeciesUseCase, ListSpeciesUseCase};

#[derive(Serialize)]
pub struct SpeciesResponse {
    pub id: i32,
    pub name: String,
}

// ── GET /species ─────────────────────────────────────────────────────────────

pub async fn get_species(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpeciesResponse>>, ApiError> {
    let usecase = ListSpeciesUseCase {
        repo: state.species_repo(),
    };
    let species = usecase.execute().await?;
    Ok(Json(
        species
            .into_iter()
            .map(|s| SpeciesResponse {
                id: s.id,
                name: s.name,
            })
            .collect(),
    ))
}

// ── GET /species/{id} ────────────────────────────────────────────────────────

pub async fn get_species_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SpeciesResponse>, ApiError> {
    let usecase = GetSpeciesUseCase {
        repo: state.species_repo(),
    };
    let species = usecase.execute(id).await?;
    Ok(Json(SpeciesResponse {
        id: species.id,
        name: species.name,
    }))
}
