//! Author profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::rich_text::RichText;

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub bio: Option<RichText>,
    /// Media document used as avatar
    pub avatar: Option<Uuid>,
    /// Owning user account
    pub user: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author creation data transfer object
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub slug: String,
    pub bio: Option<RichText>,
    pub avatar: Option<Uuid>,
    pub user: Option<Uuid>,
}
