//! Author database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{Author, RichText};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    /// Rich-text document as JSON
    pub bio: Option<Json>,
    pub avatar_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::AvatarId",
        to = "super::media::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Avatar,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Author {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let bio = model
            .bio
            .map(serde_json::from_value::<RichText>)
            .transpose()
            .map_err(|e| AppError::internal(format!("Corrupt bio for author {}: {}", model.id, e)))?;

        Ok(Author {
            id: model.id,
            name: model.name,
            slug: model.slug,
            bio,
            avatar: model.avatar_id,
            user: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
