//! Media database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Media;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub alt: String,
    #[sea_orm(unique)]
    pub filename: String,
    pub mime_type: String,
    pub filesize: i64,
    pub url: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Media {
    fn from(model: Model) -> Self {
        Media {
            id: model.id,
            alt: model.alt,
            filename: model.filename,
            mime_type: model.mime_type,
            filesize: model.filesize,
            url: model.url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
