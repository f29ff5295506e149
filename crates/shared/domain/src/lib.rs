//! Domain layer - Content entities, value objects and access rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage crates map their rows onto the types defined here.

pub mod access;
pub mod author;
pub mod collection;
pub mod comment;
pub mod constants;
pub mod error;
pub mod media;
pub mod password;
pub mod post;
pub mod rich_text;
pub mod slug;
pub mod user;

pub use access::{collection_policy, Access, AccessDecision, Caller, CollectionPolicy};
pub use author::{Author, NewAuthor};
pub use collection::{Collection, Document};
pub use comment::{Comment, NewComment};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use media::{Media, NewMedia};
pub use password::Password;
pub use post::{validate_published_at, NewPost, Post, PostStatus};
pub use rich_text::{RichText, RichTextNode, TextLeaf};
pub use slug::slugify;
pub use user::{NewUser, User, UserRole};
