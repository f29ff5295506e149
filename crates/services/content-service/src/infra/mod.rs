//! Infrastructure layer - database and upload storage.

mod db;
mod media_storage;
pub mod migrations;

pub use db::{Database, MigrationStatus};
pub use media_storage::{MediaStorage, StoredFile};
pub use migrations::Migrator;
