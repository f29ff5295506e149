//! Seed procedure.
//!
//! Wipes the content collections and recreates the sample records in
//! dependency order: users, media, authors, posts, comments.

use std::collections::HashMap;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::{
    slugify, Access, Author, Collection, Comment, Media, NewAuthor, NewComment, NewMedia, NewPost,
    NewUser, Post, PostStatus, RichText, User,
};

use super::fixtures::{AUTHORS, COMMENTS, MEDIA, POSTS, SEED_PASSWORD, SINGLE_PIXEL_GIF, USERS};
use crate::repository::{DocumentStore, PageRequest};

/// Collections wiped before seeding, children first.
pub const CLEAR_ORDER: [Collection; 5] = [
    Collection::Comments,
    Collection::Posts,
    Collection::Authors,
    Collection::Media,
    Collection::Users,
];

pub const CLEAR_PAGE_SIZE: u64 = 50;

/// A created media document with the local key fixtures refer to it by.
#[derive(Debug, Clone)]
pub struct SeededMedia {
    pub seed_key: &'static str,
    pub media: Media,
}

/// Number of documents created per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub media: usize,
    pub authors: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Runs the seed stages against a document store.
pub struct Seeder<'a> {
    store: &'a dyn DocumentStore,
    asset_dir: PathBuf,
}

impl<'a> Seeder<'a> {
    /// `asset_dir` receives the decoded sample images before upload.
    pub fn new(store: &'a dyn DocumentStore, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            asset_dir: asset_dir.into(),
        }
    }

    /// Clear every collection, then create the sample records.
    pub async fn run(&self, now: DateTime<Utc>) -> AppResult<SeedReport> {
        for collection in CLEAR_ORDER {
            self.clear_collection(collection).await?;
        }

        let users = self.seed_users().await?;
        let media = self.seed_media().await?;
        let authors = self.seed_authors(&media, &users).await?;
        let posts = self.seed_posts(&authors, &media, now).await?;
        let comments = self.seed_comments(&posts, &users).await?;

        Ok(SeedReport {
            users: users.len(),
            media: media.len(),
            authors: authors.len(),
            posts: posts.len(),
            comments: comments.len(),
        })
    }

    /// Delete every document in a collection. Returns how many were removed.
    ///
    /// Always reads the first page: deleting shifts the remaining documents
    /// forward, so advancing the page number would skip some of them.
    pub async fn clear_collection(&self, collection: Collection) -> AppResult<u64> {
        let request = PageRequest::new(1, CLEAR_PAGE_SIZE);
        let mut removed = 0;

        loop {
            let page = self.store.find(collection, request, Access::Override).await?;
            if page.docs.is_empty() {
                break;
            }

            for doc in &page.docs {
                self.store.delete(collection, doc.id(), Access::Override).await?;
                removed += 1;
            }

            if !page.has_next_page {
                break;
            }
        }

        info!(collection = %collection, removed, "Cleared collection");
        Ok(removed)
    }

    pub async fn seed_users(&self) -> AppResult<Vec<User>> {
        let mut created = Vec::with_capacity(USERS.len());

        for fixture in USERS {
            let data = NewUser {
                email: fixture.email.to_string(),
                password: SEED_PASSWORD.to_string(),
                role: fixture.role,
            };
            let user = self.store.create_user(data, Access::Override).await?;
            debug!(email = %user.email, role = %user.role, "Seeded user");
            created.push(user);
        }

        info!("Seeded {} users", created.len());
        Ok(created)
    }

    pub async fn seed_media(&self) -> AppResult<Vec<SeededMedia>> {
        let mut created = Vec::with_capacity(MEDIA.len());

        for fixture in MEDIA {
            let file_path = self.ensure_seed_asset(fixture.filename, SINGLE_PIXEL_GIF).await?;
            let data = NewMedia {
                alt: fixture.alt.to_string(),
                file_path,
            };
            let media = self.store.create_media(data, Access::Override).await?;
            debug!(key = fixture.key, url = %media.url, "Seeded media");
            created.push(SeededMedia {
                seed_key: fixture.key,
                media,
            });
        }

        info!("Seeded {} media documents", created.len());
        Ok(created)
    }

    pub async fn seed_authors(&self, media: &[SeededMedia], users: &[User]) -> AppResult<Vec<Author>> {
        let media_by_key: HashMap<&str, &Media> =
            media.iter().map(|item| (item.seed_key, &item.media)).collect();
        let users_by_email: HashMap<&str, &User> =
            users.iter().map(|user| (user.email.as_str(), user)).collect();

        let mut created = Vec::with_capacity(AUTHORS.len());

        for fixture in AUTHORS {
            // Keys keep their original case, so this lookup never matches and
            // seeded authors are left without a linked account.
            let user = users_by_email
                .get(fixture.user_email.to_uppercase().as_str())
                .map(|user| user.id);

            let data = NewAuthor {
                name: fixture.name.to_string(),
                slug: slugify(fixture.name),
                bio: Some(RichText::from_paragraphs(fixture.bio)),
                avatar: media_by_key.get(fixture.avatar_key).map(|m| m.id),
                user,
            };
            let author = self.store.create_author(data, Access::Override).await?;
            debug!(slug = %author.slug, "Seeded author");
            created.push(author);
        }

        info!("Seeded {} authors", created.len());
        Ok(created)
    }

    /// Publish dates are offsets from `now`, so seeded posts are always live.
    pub async fn seed_posts(
        &self,
        authors: &[Author],
        media: &[SeededMedia],
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Post>> {
        let media_by_key: HashMap<&str, &Media> =
            media.iter().map(|item| (item.seed_key, &item.media)).collect();
        let authors_by_slug: HashMap<&str, &Author> =
            authors.iter().map(|author| (author.slug.as_str(), author)).collect();

        let mut created = Vec::with_capacity(POSTS.len());

        for fixture in POSTS {
            let author_slug = slugify(fixture.author_name);
            let author = authors_by_slug
                .get(author_slug.as_str())
                .ok_or_else(|| AppError::missing_reference("author", "slug", &author_slug, "posts"))?;

            let data = NewPost {
                title: fixture.title.to_string(),
                slug: slugify(fixture.title),
                excerpt: Some(fixture.excerpt.to_string()),
                body: RichText::from_paragraphs(fixture.body),
                categories: Some(fixture.categories.to_string()),
                cover_image: media_by_key.get(fixture.cover_key).map(|m| m.id),
                author: author.id,
                status: PostStatus::Published,
                published_at: Some(now - Duration::days(fixture.days_ago)),
            };
            let post = self.store.create_post(data, Access::Override).await?;
            debug!(slug = %post.slug, author = %author_slug, "Seeded post");
            created.push(post);
        }

        info!("Seeded {} posts", created.len());
        Ok(created)
    }

    pub async fn seed_comments(&self, posts: &[Post], users: &[User]) -> AppResult<Vec<Comment>> {
        let posts_by_slug: HashMap<&str, &Post> =
            posts.iter().map(|post| (post.slug.as_str(), post)).collect();
        let users_by_email: HashMap<&str, &User> =
            users.iter().map(|user| (user.email.as_str(), user)).collect();

        let mut created = Vec::with_capacity(COMMENTS.len());

        for fixture in COMMENTS {
            let post_slug = slugify(fixture.post_title);
            let post = posts_by_slug
                .get(post_slug.as_str())
                .ok_or_else(|| AppError::missing_reference("post", "slug", &post_slug, "comments"))?;

            let data = NewComment {
                body: fixture.body.to_string(),
                approved: fixture.approved,
                post: post.id,
                user: users_by_email.get(fixture.user_email).map(|user| user.id),
            };
            let comment = self.store.create_comment(data, Access::Override).await?;
            debug!(post = %post_slug, approved = comment.approved, "Seeded comment");
            created.push(comment);
        }

        info!("Seeded {} comments", created.len());
        Ok(created)
    }

    /// Write an embedded asset to the asset directory and return its path.
    async fn ensure_seed_asset(&self, filename: &str, encoded: &str) -> AppResult<PathBuf> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| AppError::internal(format!("Invalid seed asset {}: {}", filename, e)))?;

        tokio::fs::create_dir_all(&self.asset_dir).await?;
        let path = self.asset_dir.join(filename);
        tokio::fs::write(&path, bytes).await?;

        Ok(path)
    }
}
