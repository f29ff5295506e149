//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_media_table;
mod m20240101_000003_create_authors_table;
mod m20240101_000004_create_posts_table;
mod m20240101_000005_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_media_table::Migration),
            Box::new(m20240101_000003_create_authors_table::Migration),
            Box::new(m20240101_000004_create_posts_table::Migration),
            Box::new(m20240101_000005_create_comments_table::Migration),
        ]
    }
}

/// Table identifiers shared by the migrations.
#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Media {
    Table,
    Id,
    Alt,
    Filename,
    MimeType,
    Filesize,
    Url,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Authors {
    Table,
    Id,
    Name,
    Slug,
    Bio,
    AvatarId,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Posts {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Body,
    Categories,
    CoverImageId,
    AuthorId,
    Status,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Comments {
    Table,
    Id,
    Body,
    Approved,
    PostId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
