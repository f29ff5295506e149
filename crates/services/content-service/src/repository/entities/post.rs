//! Post database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{Post, PostStatus, RichText};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique, indexed)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    /// Rich-text document as JSON
    pub body: Json,
    pub categories: Option<String>,
    pub cover_image_id: Option<Uuid>,
    pub author_id: Uuid,
    /// `draft` or `published`
    pub status: String,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::CoverImageId",
        to = "super::media::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CoverImage,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Post {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let body: RichText = serde_json::from_value(model.body)
            .map_err(|e| AppError::internal(format!("Corrupt body for post {}: {}", model.id, e)))?;

        Ok(Post {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            body,
            categories: model.categories,
            cover_image: model.cover_image_id,
            author: model.author_id,
            status: PostStatus::from(model.status.as_str()),
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
