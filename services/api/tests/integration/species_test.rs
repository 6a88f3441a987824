use pokedex_api::domain::repository::SpeciesRepository;
use pokedex_api::domain::types::SpeciesKind;
use pokedex_api::error::ApiError;
use pokedex_api::usecase::species::{GetSpeciesUseCase, ListSpeciesUseCase, SeedSpeciesUseCase};

use crate::helpers::InMemSpeciesRepo;

#[tokio::test]
async fn should_seed_all_18_types_into_empty_store() {
    let usecase = SeedSpeciesUseCase {
        repo: InMemSpeciesRepo::empty(),
    };
    let outcome = usecase.execute().await.unwrap();

    assert_eq!(outcome.created, 18);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(usecase.repo.row_count(), 18);
}

#[tokio::test]
async fn should_skip_everything_on_second_seed() {
    let repo = InMemSpeciesRepo::empty();
    let usecase = SeedSpeciesUseCase { repo: repo.clone() };

    usecase.execute().await.unwrap();
    let second = usecase.execute().await.unwrap();

    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 18);
    assert_eq!(repo.row_count(), 18);
}

#[tokio::test]
async fn should_backfill_only_missing_types() {
    let repo = InMemSpeciesRepo::empty();
    repo.create("Fire", SpeciesKind::Fire).await.unwrap();
    repo.create("Water", SpeciesKind::Water).await.unwrap();

    let usecase = SeedSpeciesUseCase { repo: repo.clone() };
    let outcome = usecase.execute().await.unwrap();

    assert_eq!(outcome.created, 16);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(repo.row_count(), 18);
}

#[tokio::test]
async fn should_list_species_in_id_order() {
    let repo = InMemSpeciesRepo::empty();
    SeedSpeciesUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();

    let usecase = ListSpeciesUseCase { repo };
    let species = usecase.execute().await.unwrap();

    assert_eq!(species.len(), 18);
    assert_eq!(species[0].name, "Normal");
    assert_eq!(species[17].name, "Fairy");
    assert!(species.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn should_return_species_not_found_for_unknown_id() {
    let usecase = GetSpeciesUseCase {
        repo: InMemSpeciesRepo::empty(),
    };
    let result = usecase.execute(3).await;
    assert!(matches!(result, Err(ApiError::SpeciesNotFound(3))));
}
