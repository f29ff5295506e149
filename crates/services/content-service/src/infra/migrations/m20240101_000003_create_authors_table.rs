//! Migration: Create authors table.

use sea_orm_migration::prelude::*;

use super::{Authors, Media, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Authors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .col(ColumnDef::new(Authors::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Authors::Bio).json().null())
                    .col(ColumnDef::new(Authors::AvatarId).uuid().null())
                    .col(ColumnDef::new(Authors::UserId).uuid().null())
                    .col(ColumnDef::new(Authors::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Authors::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authors_avatar")
                            .from(Authors::Table, Authors::AvatarId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authors_user")
                            .from(Authors::Table, Authors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}
