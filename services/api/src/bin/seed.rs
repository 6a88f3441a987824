//! Idempotent species seeder — inserts the 18 elemental types, skipping any
//! that already exist. Safe to re-run.

use sea_orm::Database;
use tracing::info;

use pokedex_api::infra::db::DbSpeciesRepository;
use pokedex_api::usecase::species::SeedSpeciesUseCase;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let db = Database::connect(&database_url)
        .await
        .expect("failed to connect to database");

    let usecase = SeedSpeciesUseCase {
        repo: DbSpeciesRepository { db },
    };
    let outcome = usecase.execute().await.expect("failed to seed species");

    info!(
        created = outcome.created,
        skipped = outcome.skipped,
        "species seed complete"
    );
}
