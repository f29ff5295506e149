//! Content Service Library
//!
//! Storage for the content collections (users, media, authors, posts,
//! comments) and the seed procedure that fills them with sample data.
//! Used by the `content-service` admin binary and the standalone `seed` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use chrono::Utc;
use tracing::{error, info, warn};

use common::{AppResult, DatabaseConfig};

use crate::config::SeedConfig;
use crate::infra::{Database, MediaStorage};
use crate::repository::CollectionStore;
use crate::service::{SeedReport, Seeder};

/// Run the seed procedure end to end.
///
/// The database connection is closed before returning, whether seeding
/// succeeded or not.
pub async fn run_seed(config: &SeedConfig) -> AppResult<SeedReport> {
    let result = seed(config).await;

    match &result {
        Ok(report) => {
            info!(
                users = report.users,
                media = report.media,
                authors = report.authors,
                posts = report.posts,
                comments = report.comments,
                "Seed data successfully created."
            );
        }
        Err(e) => error!(code = e.code(), "Failed to seed database: {}", e),
    }

    result
}

async fn seed(config: &SeedConfig) -> AppResult<SeedReport> {
    let db = Database::connect(&config.database).await?;

    let store = CollectionStore::new(
        db.get_connection(),
        MediaStorage::new(&config.media),
        config.secret.as_bytes(),
    );
    let result = Seeder::new(&store, &config.asset_dir).run(Utc::now()).await;
    drop(store);

    if let Err(e) = db.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    result
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction, config: &DatabaseConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            warn!("Rolling back the last migration");
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for migration in status {
                let marker = if migration.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, migration.name);
            }
        }
        MigrateAction::Fresh => {
            warn!("Dropping all tables before re-running migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    db.close().await?;
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
