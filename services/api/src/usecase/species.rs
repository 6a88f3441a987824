use crate::domain::repository::SpeciesRepository;
use crate::domain::types::{Species, SpeciesKind};
use crate::error::ApiError;

// ── ListSpecies ──────────────────────────────────────────────────────────────

pub struct ListSpeciesUseCase<R: SpeciesRepository> {
    pub repo: R,
}

impl<R: SpeciesRepository> ListSpeciesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Species>, ApiError> {
        self.repo.list().await
    }
}

// ── GetSpecies ───────────────────────────────────────────────────────────────

pub struct GetSpeciesUseCase<R: SpeciesRepository> {
    pub repo: R,
}

impl<R: SpeciesRepository> GetSpeciesUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Species, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::SpeciesNotFound(id))
    }
}

// ── SeedSpecies ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub struct SeedOutcome {
    pub created: usize,
    pub skipped: usize,
}

/// Populate the 18 elemental types. Idempotent — existing names are skipped,
/// so re-running never duplicates a row.
pub struct SeedSpeciesUseCase<R: SpeciesRepository> {
    pub repo: R,
}

impl<R: SpeciesRepository> SeedSpeciesUseCase<R> {
    pub async fn execute(&self) -> Result<SeedOutcome, ApiError> {
        let mut created = 0;
        let mut skipped = 0;
        for kind in SpeciesKind::ALL {
            if self.repo.find_by_name(kind.label()).await?.is_some() {
                tracing::info!(name = kind.label(), "species already exists");
                skipped += 1;
                continue;
            }
            self.repo.create(kind.label(), kind).await?;
            tracing::info!(name = kind.label(), "species created");
            created += 1;
        }
        Ok(SeedOutcome { created, skipped })
    }
}
