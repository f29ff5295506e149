//! Document store over the five content collections.
//!
//! Every operation takes an [`Access`]: `Access::Override` skips the
//! collection rules, anything else is checked against `collection_policy`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder, Select, Set, SqlErr,
};
use uuid::Uuid;
use validator::Validate;

use super::entities::{author, comment, media, post, user};
use super::pagination::{Page, PageRequest};
use crate::infra::MediaStorage;
use common::{AppError, AppResult, OptionExt};
use domain::access::Rule;
use domain::{
    collection_policy, slugify, Access, AccessDecision, Author, Collection, Comment, Document,
    DomainError, Media, NewAuthor, NewComment, NewMedia, NewPost, NewUser, Password, Post, User,
    STATUS_PUBLISHED,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Data-access contract consumed by the seeder and other tooling.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one page of a collection, oldest first
    async fn find(
        &self,
        collection: Collection,
        page: PageRequest,
        access: Access,
    ) -> AppResult<Page<Document>>;

    /// Delete a document by id
    async fn delete(&self, collection: Collection, id: Uuid, access: Access) -> AppResult<()>;

    /// Create a user; the password is hashed before storage
    async fn create_user(&self, data: NewUser, access: Access) -> AppResult<User>;

    /// Upload a file and create its media document
    async fn create_media(&self, data: NewMedia, access: Access) -> AppResult<Media>;

    async fn create_author(&self, data: NewAuthor, access: Access) -> AppResult<Author>;

    async fn create_post(&self, data: NewPost, access: Access) -> AppResult<Post>;

    async fn create_comment(&self, data: NewComment, access: Access) -> AppResult<Comment>;
}

/// SeaORM implementation of [`DocumentStore`].
pub struct CollectionStore {
    db: DatabaseConnection,
    media: MediaStorage,
    secret: Vec<u8>,
}

impl CollectionStore {
    /// `secret` keys password hashes.
    pub fn new(db: DatabaseConnection, media: MediaStorage, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            db,
            media,
            secret: secret.into(),
        }
    }

    async fn fetch<E>(&self, select: Select<E>, request: PageRequest) -> AppResult<(Vec<E::Model>, u64)>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let paginator = select.paginate(&self.db, request.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(request.index()).await?;
        Ok((models, total))
    }

    async fn ensure_exists<E>(&self, id: Uuid, label: &str) -> AppResult<()>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        if E::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(AppError::validation(format!("{} {} does not exist", label, id)));
        }
        Ok(())
    }

    async fn ensure_optional<E>(&self, id: Option<Uuid>, label: &str) -> AppResult<()>
    where
        E: EntityTrait,
        Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        match id {
            Some(id) => self.ensure_exists::<E>(id, label).await,
            None => Ok(()),
        }
    }
}

/// Evaluate a rule, treating an override as unconditional access.
fn decide(access: Access, rule: Rule) -> AccessDecision {
    match access {
        Access::Override => AccessDecision::Allow,
        Access::As(caller) => rule(caller.as_ref()),
    }
}

fn require(access: Access, rule: Rule) -> AppResult<()> {
    match access {
        Access::Override => Ok(()),
        Access::As(caller) => Ok(rule(caller.as_ref()).require(caller.as_ref())?),
    }
}

fn denied(access: Access) -> AppError {
    match access {
        Access::As(Some(_)) => AppError::Forbidden,
        _ => AppError::Unauthorized,
    }
}

fn check_owner(decision: AccessDecision, owner: Option<Uuid>, access: Access) -> AppResult<()> {
    if decision.permits_owner(owner) {
        Ok(())
    } else {
        Err(denied(access))
    }
}

/// Narrow a query to documents the decision lets the caller see.
fn scope<E, C>(select: Select<E>, decision: AccessDecision, owner: C) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    match decision {
        AccessDecision::OwnedBy(Some(id)) => select.filter(owner.eq(id)),
        _ => select,
    }
}

fn map_insert_err(err: DbErr, entity: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity),
        _ => AppError::Database(err),
    }
}

/// Use the given slug when present, otherwise derive one from `source`.
fn resolve_slug(slug: &str, source: &str) -> AppResult<String> {
    let slug = if slug.trim().is_empty() {
        slugify(source)
    } else {
        slugify(slug)
    };

    if slug.is_empty() {
        return Err(DomainError::validation("slug cannot be derived from an empty value").into());
    }
    Ok(slug)
}

#[async_trait]
impl DocumentStore for CollectionStore {
    async fn find(
        &self,
        collection: Collection,
        request: PageRequest,
        access: Access,
    ) -> AppResult<Page<Document>> {
        let decision = decide(access, collection_policy(collection).read);

        match decision {
            AccessDecision::Deny => return Err(denied(access)),
            AccessDecision::OwnedBy(None) => return Ok(Page::new(Vec::new(), request, 0)),
            _ => {}
        }

        let page = match collection {
            Collection::Users => {
                let select = user::Entity::find()
                    .order_by_asc(user::Column::CreatedAt)
                    .order_by_asc(user::Column::Id);
                let (models, total) = self
                    .fetch(scope(select, decision, user::Column::Id), request)
                    .await?;
                let docs = models.into_iter().map(|m| Document::User(m.into())).collect();
                Page::new(docs, request, total)
            }
            Collection::Media => {
                let select = media::Entity::find()
                    .order_by_asc(media::Column::CreatedAt)
                    .order_by_asc(media::Column::Id);
                let (models, total) = self.fetch(select, request).await?;
                let docs = models.into_iter().map(|m| Document::Media(m.into())).collect();
                Page::new(docs, request, total)
            }
            Collection::Authors => {
                let select = author::Entity::find()
                    .order_by_asc(author::Column::CreatedAt)
                    .order_by_asc(author::Column::Id);
                let (models, total) = self
                    .fetch(scope(select, decision, author::Column::UserId), request)
                    .await?;
                let docs = models
                    .into_iter()
                    .map(|m| Author::try_from(m).map(Document::Author))
                    .collect::<AppResult<Vec<_>>>()?;
                Page::new(docs, request, total)
            }
            Collection::Posts => {
                let mut select = post::Entity::find()
                    .order_by_asc(post::Column::CreatedAt)
                    .order_by_asc(post::Column::Id);
                if decision == AccessDecision::PublishedOnly {
                    select = select.filter(post::Column::Status.eq(STATUS_PUBLISHED));
                }
                let (models, total) = self.fetch(select, request).await?;
                let docs = models
                    .into_iter()
                    .map(|m| Post::try_from(m).map(Document::Post))
                    .collect::<AppResult<Vec<_>>>()?;
                Page::new(docs, request, total)
            }
            Collection::Comments => {
                let select = comment::Entity::find()
                    .order_by_asc(comment::Column::CreatedAt)
                    .order_by_asc(comment::Column::Id);
                let (models, total) = self
                    .fetch(scope(select, decision, comment::Column::UserId), request)
                    .await?;
                let docs = models.into_iter().map(|m| Document::Comment(m.into())).collect();
                Page::new(docs, request, total)
            }
        };

        Ok(page)
    }

    async fn delete(&self, collection: Collection, id: Uuid, access: Access) -> AppResult<()> {
        let decision = decide(access, collection_policy(collection).delete);
        if decision == AccessDecision::Deny {
            return Err(denied(access));
        }

        match collection {
            Collection::Users => {
                let model = user::Entity::find_by_id(id).one(&self.db).await?.ok_or_not_found()?;
                check_owner(decision, Some(model.id), access)?;
                user::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            Collection::Media => {
                let model = media::Entity::find_by_id(id).one(&self.db).await?.ok_or_not_found()?;
                check_owner(decision, None, access)?;
                media::Entity::delete_by_id(id).exec(&self.db).await?;
                self.media.remove(&model.filename).await?;
            }
            Collection::Authors => {
                let model = author::Entity::find_by_id(id).one(&self.db).await?.ok_or_not_found()?;
                check_owner(decision, model.user_id, access)?;
                author::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            Collection::Posts => {
                post::Entity::find_by_id(id).one(&self.db).await?.ok_or_not_found()?;
                check_owner(decision, None, access)?;
                post::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            Collection::Comments => {
                let model = comment::Entity::find_by_id(id).one(&self.db).await?.ok_or_not_found()?;
                check_owner(decision, model.user_id, access)?;
                comment::Entity::delete_by_id(id).exec(&self.db).await?;
            }
        }

        tracing::debug!(collection = %collection, %id, "Deleted document");
        Ok(())
    }

    async fn create_user(&self, data: NewUser, access: Access) -> AppResult<User> {
        require(access, collection_policy(Collection::Users).create)?;
        data.validate().map_err(DomainError::from)?;

        let password = Password::new(&data.password, &self.secret)?;
        let now = Utc::now();
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(password.into_string()),
            role: Set(data.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, "Email"))?;
        Ok(User::from(model))
    }

    async fn create_media(&self, data: NewMedia, access: Access) -> AppResult<Media> {
        require(access, collection_policy(Collection::Media).create)?;
        data.validate().map_err(DomainError::from)?;

        let stored = self.media.store(&data.file_path).await?;
        let now = Utc::now();
        let active_model = media::ActiveModel {
            id: Set(Uuid::new_v4()),
            alt: Set(data.alt),
            filename: Set(stored.filename.clone()),
            mime_type: Set(stored.mime_type),
            filesize: Set(stored.filesize),
            url: Set(stored.url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(Media::from(model)),
            Err(e) => {
                // Don't leave an orphaned upload behind
                if let Err(cleanup) = self.media.remove(&stored.filename).await {
                    tracing::warn!("Failed to remove upload {}: {}", stored.filename, cleanup);
                }
                Err(map_insert_err(e, "Media file"))
            }
        }
    }

    async fn create_author(&self, data: NewAuthor, access: Access) -> AppResult<Author> {
        require(access, collection_policy(Collection::Authors).create)?;
        data.validate().map_err(DomainError::from)?;

        let slug = resolve_slug(&data.slug, &data.name)?;
        self.ensure_optional::<media::Entity>(data.avatar, "avatar").await?;
        self.ensure_optional::<user::Entity>(data.user, "user").await?;

        let bio = data
            .bio
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::internal(format!("Failed to encode bio: {}", e)))?;

        let now = Utc::now();
        let active_model = author::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(slug),
            bio: Set(bio),
            avatar_id: Set(data.avatar),
            user_id: Set(data.user),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, "Author slug"))?;
        Author::try_from(model)
    }

    async fn create_post(&self, data: NewPost, access: Access) -> AppResult<Post> {
        require(access, collection_policy(Collection::Posts).create)?;

        let now = Utc::now();
        data.check(now)?;

        let slug = resolve_slug(&data.slug, &data.title)?;
        self.ensure_exists::<author::Entity>(data.author, "author").await?;
        self.ensure_optional::<media::Entity>(data.cover_image, "cover image").await?;

        let body = serde_json::to_value(&data.body)
            .map_err(|e| AppError::internal(format!("Failed to encode body: {}", e)))?;

        let active_model = post::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(slug),
            excerpt: Set(data.excerpt),
            body: Set(body),
            categories: Set(data.categories),
            cover_image_id: Set(data.cover_image),
            author_id: Set(data.author),
            status: Set(data.status.to_string()),
            published_at: Set(data.published_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, "Post slug"))?;
        Post::try_from(model)
    }

    async fn create_comment(&self, data: NewComment, access: Access) -> AppResult<Comment> {
        require(access, collection_policy(Collection::Comments).create)?;
        data.validate().map_err(DomainError::from)?;

        self.ensure_exists::<post::Entity>(data.post, "post").await?;
        self.ensure_optional::<user::Entity>(data.user, "user").await?;

        let now = Utc::now();
        let active_model = comment::ActiveModel {
            id: Set(Uuid::new_v4()),
            body: Set(data.body),
            approved: Set(data.approved),
            post_id: Set(data.post),
            user_id: Set(data.user),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Comment::from(model))
    }
}
