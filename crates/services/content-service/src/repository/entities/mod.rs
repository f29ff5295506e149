//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod author;
pub mod comment;
pub mod media;
pub mod post;
pub mod user;
