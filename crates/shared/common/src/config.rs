//! Shared configuration structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(skip_serializing)]
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://content.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Directory uploaded files are copied into
    pub static_dir: PathBuf,
    /// Public base URL; when unset, media URLs are root-relative
    pub server_url: Option<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("media"),
            server_url: None,
        }
    }
}
