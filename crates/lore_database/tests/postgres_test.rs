//! PostgreSQL repository tests.
//!
//! Run with `--features database-tests` and `DATABASE_URL` pointing at a
//! scratch database.

use lore_core::StoreConfig;
use lore_database::PostgresLocationRepository;
use lore_interface::LocationRepository;

fn repository() -> anyhow::Result<PostgresLocationRepository> {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL")?;
    let config = StoreConfig::default().with_database_url(url);
    Ok(PostgresLocationRepository::connect(&config)?)
}

#[tokio::test]
#[cfg_attr(not(feature = "database-tests"), ignore)]
async fn insert_assigns_id_and_timestamp() -> anyhow::Result<()> {
    let repo = repository()?;
    repo.run_migrations().await?;

    let saved = repo.insert("Alhambra, Granada", "Nasrid palace complex.").await?;
    assert!(!saved.id.is_empty());
    assert_eq!(saved.name, "Alhambra, Granada");

    let listed = repo.list_recent().await?;
    let position = listed.iter().position(|l| l.id == saved.id);
    assert!(position.is_some());
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    Ok(())
}

#[test]
fn missing_url_is_unconfigured() {
    let err = PostgresLocationRepository::connect(&StoreConfig::default()).unwrap_err();
    assert!(err.as_store().is_some_and(|e| e.is_unconfigured()));
}
