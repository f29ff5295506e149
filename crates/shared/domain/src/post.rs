//! Blog posts and their publication rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{FUTURE_PUBLISHED_AT_MESSAGE, STATUS_DRAFT, STATUS_PUBLISHED};
use crate::error::{DomainError, DomainResult};
use crate::rich_text::RichText;

/// Draft/published flag controlling public visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => STATUS_DRAFT,
            PostStatus::Published => STATUS_PUBLISHED,
        }
    }
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_PUBLISHED => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Short summary for listings
    pub excerpt: Option<String>,
    pub body: RichText,
    /// Comma separated category labels
    pub categories: Option<String>,
    pub cover_image: Option<Uuid>,
    pub author: Uuid,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Category labels split on commas, blanks dropped.
    pub fn category_list(&self) -> Vec<&str> {
        self.categories
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Post creation data transfer object
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: RichText,
    pub categories: Option<String>,
    pub cover_image: Option<Uuid>,
    pub author: Uuid,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewPost {
    /// Field rules that go beyond the derive: body content and publish date.
    pub fn check(&self, now: DateTime<Utc>) -> DomainResult<()> {
        self.validate()?;

        if self.body.is_empty() {
            return Err(DomainError::validation("body is required"));
        }

        validate_published_at(self.published_at, now)
    }
}

/// Reject publish dates later than `now`. A missing date is accepted.
pub fn validate_published_at(
    published_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    match published_at {
        Some(at) if at > now => Err(DomainError::validation(FUTURE_PUBLISHED_AT_MESSAGE)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_post(published_at: Option<DateTime<Utc>>) -> NewPost {
        NewPost {
            title: "Title".to_string(),
            slug: "title".to_string(),
            excerpt: None,
            body: RichText::from_paragraphs(&["Body"]),
            categories: Some("Product, , Strategy".to_string()),
            cover_image: None,
            author: Uuid::new_v4(),
            status: PostStatus::Published,
            published_at,
        }
    }

    #[test]
    fn test_future_published_at_rejected() {
        let now = Utc::now();
        let result = validate_published_at(Some(now + Duration::seconds(1)), now);

        match result {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, FUTURE_PUBLISHED_AT_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_past_and_present_published_at_accepted() {
        let now = Utc::now();

        assert!(validate_published_at(Some(now), now).is_ok());
        assert!(validate_published_at(Some(now - Duration::days(7)), now).is_ok());
        assert!(validate_published_at(None, now).is_ok());
    }

    #[test]
    fn test_check_rejects_empty_body() {
        let mut post = new_post(None);
        post.body = RichText::from_paragraphs::<&str>(&[]);

        assert!(post.check(Utc::now()).is_err());
    }

    #[test]
    fn test_check_rejects_empty_title() {
        let mut post = new_post(None);
        post.title = String::new();

        assert!(matches!(post.check(Utc::now()), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(PostStatus::from("published"), PostStatus::Published);
        assert_eq!(PostStatus::from("draft"), PostStatus::Draft);
        assert_eq!(PostStatus::from("archived"), PostStatus::Draft);
    }

    #[test]
    fn test_category_list() {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: "t".into(),
            slug: "t".into(),
            excerpt: None,
            body: RichText::from_paragraphs(&["b"]),
            categories: Some("Product, , Strategy".into()),
            cover_image: None,
            author: Uuid::new_v4(),
            status: PostStatus::Published,
            published_at: None,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(post.category_list(), vec!["Product", "Strategy"]);
    }
}
