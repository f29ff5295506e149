//! Collections and the documents they hold.

use serde::Serialize;
use uuid::Uuid;

use crate::author::Author;
use crate::comment::Comment;
use crate::error::DomainError;
use crate::media::Media;
use crate::post::Post;
use crate::user::User;

/// A named set of documents sharing a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Authors,
    Posts,
    Media,
    Comments,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Authors,
        Collection::Posts,
        Collection::Media,
        Collection::Comments,
    ];

    /// Stable identifier, also used as the table name
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Authors => "authors",
            Collection::Posts => "posts",
            Collection::Media => "media",
            Collection::Comments => "comments",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| DomainError::UnknownCollection(s.to_string()))
    }
}

/// A stored document of any collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    User(User),
    Media(Media),
    Author(Author),
    Post(Post),
    Comment(Comment),
}

impl Document {
    pub fn id(&self) -> Uuid {
        match self {
            Document::User(d) => d.id,
            Document::Media(d) => d.id,
            Document::Author(d) => d.id,
            Document::Post(d) => d.id,
            Document::Comment(d) => d.id,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Document::User(_) => Collection::Users,
            Document::Media(_) => Collection::Media,
            Document::Author(_) => Collection::Authors,
            Document::Post(_) => Collection::Posts,
            Document::Comment(_) => Collection::Comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for collection in Collection::ALL {
            assert_eq!(collection.slug().parse::<Collection>().unwrap(), collection);
        }
    }

    #[test]
    fn test_unknown_collection() {
        assert!("pages".parse::<Collection>().is_err());
    }
}
