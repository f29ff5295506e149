//! Content service configuration.

use std::env;
use std::path::PathBuf;

use common::{AppError, AppResult, DatabaseConfig, MediaConfig};

pub const SECRET_VAR: &str = "CMS_SECRET";
pub const DATABASE_VAR: &str = "DATABASE_URI";
pub const SERVER_URL_VAR: &str = "SERVER_URL";
pub const MEDIA_DIR_VAR: &str = "MEDIA_DIR";
pub const ASSET_DIR_VAR: &str = "SEED_ASSET_DIR";

/// Directory name used under the system temp dir for decoded seed assets
pub const DEFAULT_ASSET_DIR: &str = "content-seed-assets";

/// Everything the seed procedure needs before touching the store.
#[derive(Clone)]
pub struct SeedConfig {
    /// Signing secret; keys password hashes
    pub secret: String,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    /// Where sample assets are written before upload
    pub asset_dir: PathBuf,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("secret", &"[REDACTED]")
            .field("database", &self.database)
            .field("media", &self.media)
            .field("asset_dir", &self.asset_dir)
            .finish()
    }
}

impl SeedConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup.
    ///
    /// Fails on the first missing or blank required variable.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let secret = required(&lookup, SECRET_VAR)?;
        let database = DatabaseConfig::new(required(&lookup, DATABASE_VAR)?);

        let media = MediaConfig {
            static_dir: optional(&lookup, MEDIA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| MediaConfig::default().static_dir),
            server_url: optional(&lookup, SERVER_URL_VAR),
        };

        let asset_dir = optional(&lookup, ASSET_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_ASSET_DIR));

        Ok(Self {
            secret,
            database,
            media,
            asset_dir,
        })
    }
}

/// Database settings for migration commands; the signing secret is not needed.
pub fn database_from_env() -> AppResult<DatabaseConfig> {
    database_from_vars(|name| env::var(name).ok())
}

pub fn database_from_vars(lookup: impl Fn(&str) -> Option<String>) -> AppResult<DatabaseConfig> {
    Ok(DatabaseConfig::new(required(&lookup, DATABASE_VAR)?))
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> AppResult<String> {
    optional(lookup, name).ok_or_else(|| {
        AppError::config(format!("{} must be set before running the seed script.", name))
    })
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
