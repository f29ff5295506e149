//! Uploaded media documents.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Media domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: Uuid,
    /// Alternative text for the asset
    pub alt: String,
    /// Stored file name inside the upload directory
    pub filename: String,
    pub mime_type: String,
    /// Size in bytes
    pub filesize: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upload request: the source file is copied into the upload directory.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMedia {
    #[validate(length(min = 1, message = "alt is required"))]
    pub alt: String,
    pub file_path: PathBuf,
}
