//! Collection store integration tests.
//!
//! Each test runs against its own SQLite file inside a temp directory.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Duration, Utc};
use tempfile::TempDir;
use uuid::Uuid;

use common::{AppError, DatabaseConfig, MediaConfig};
use content_service_lib::infra::{Database, MediaStorage};
use content_service_lib::repository::{CollectionStore, DocumentStore, PageRequest};
use content_service_lib::service::fixtures::SINGLE_PIXEL_GIF;
use content_service_lib::service::Seeder;
use domain::{
    Access, Author, Caller, Collection, Document, NewAuthor, NewComment, NewMedia, NewPost,
    NewUser, Password, PostStatus, RichText, User, UserRole, FUTURE_PUBLISHED_AT_MESSAGE,
};

const SECRET: &str = "test-secret";

// =============================================================================
// Helpers
// =============================================================================

struct TestStore {
    dir: TempDir,
    _db: Database,
    store: CollectionStore,
}

async fn setup() -> TestStore {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("content.db").display());

    let db = Database::connect(&DatabaseConfig::new(url)).await.unwrap();
    let media = MediaStorage::new(&MediaConfig {
        static_dir: dir.path().join("media"),
        server_url: Some("https://cms.example.com/".to_string()),
    });
    let store = CollectionStore::new(db.get_connection(), media, SECRET.as_bytes());

    TestStore {
        dir,
        _db: db,
        store,
    }
}

impl TestStore {
    fn write_asset(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, STANDARD.decode(SINGLE_PIXEL_GIF).unwrap()).unwrap();
        path
    }

    async fn user(&self, email: &str, role: UserRole) -> User {
        let data = NewUser {
            email: email.to_string(),
            password: "payload".to_string(),
            role,
        };
        self.store.create_user(data, Access::Override).await.unwrap()
    }

    async fn author(&self, name: &str, user: Option<Uuid>) -> Author {
        let data = NewAuthor {
            name: name.to_string(),
            slug: String::new(),
            bio: None,
            avatar: None,
            user,
        };
        self.store.create_author(data, Access::Override).await.unwrap()
    }

    async fn count(&self, collection: Collection) -> u64 {
        self.store
            .find(collection, PageRequest::new(1, 10), Access::Override)
            .await
            .unwrap()
            .total_docs
    }
}

fn new_post(title: &str, author: Uuid, status: PostStatus) -> NewPost {
    NewPost {
        title: title.to_string(),
        slug: String::new(),
        excerpt: None,
        body: RichText::from_paragraphs(&["First paragraph.", "Second paragraph."]),
        categories: Some("Operations".to_string()),
        cover_image: None,
        author,
        status,
        published_at: Some(Utc::now() - Duration::hours(1)),
    }
}

fn caller(user: &User) -> Access {
    Access::caller(Caller::from(user))
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_future_published_at_rejected() {
    let env = setup().await;
    let author = env.author("Evelyn Harper", None).await;

    let mut post = new_post("Later", author.id, PostStatus::Published);
    post.published_at = Some(Utc::now() + Duration::hours(1));
    let result = env.store.create_post(post, Access::Override).await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, FUTURE_PUBLISHED_AT_MESSAGE),
        other => panic!("expected validation error, got {:?}", other),
    }

    let post = new_post("Earlier", author.id, PostStatus::Published);
    assert!(env.store.create_post(post, Access::Override).await.is_ok());
}

#[tokio::test]
async fn test_slugs_derived_from_titles() {
    let env = setup().await;
    let author = env.author("  Evelyn   Harper ", None).await;

    let post = env
        .store
        .create_post(
            new_post("Why Product Thinking Belongs!", author.id, PostStatus::Draft),
            Access::Override,
        )
        .await
        .unwrap();

    assert_eq!(author.slug, "evelyn-harper");
    assert_eq!(post.slug, "why-product-thinking-belongs");
    assert_eq!(post.body.paragraphs(), vec!["First paragraph.", "Second paragraph."]);
}

#[tokio::test]
async fn test_missing_references_rejected() {
    let env = setup().await;

    let post = new_post("Orphan", Uuid::new_v4(), PostStatus::Published);
    let result = env.store.create_post(post, Access::Override).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let comment = NewComment {
        body: "Hello".to_string(),
        approved: true,
        post: Uuid::new_v4(),
        user: None,
    };
    let result = env.store.create_comment(comment, Access::Override).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let author = NewAuthor {
        name: "Marcus Reed".to_string(),
        slug: String::new(),
        bio: None,
        avatar: Some(Uuid::new_v4()),
        user: None,
    };
    let result = env.store.create_author(author, Access::Override).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let env = setup().await;
    env.user("editor@example.com", UserRole::Editor).await;

    let data = NewUser {
        email: "editor@example.com".to_string(),
        password: "payload".to_string(),
        role: UserRole::Admin,
    };
    let result = env.store.create_user(data, Access::Override).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_duplicate_author_slug_conflicts() {
    let env = setup().await;
    env.author("Marcus Reed", None).await;

    let data = NewAuthor {
        name: "Marcus  Reed".to_string(),
        slug: String::new(),
        bio: None,
        avatar: None,
        user: None,
    };
    let result = env.store.create_author(data, Access::Override).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let env = setup().await;
    let data = NewUser {
        email: "not-an-email".to_string(),
        password: "payload".to_string(),
        role: UserRole::Editor,
    };

    let result = env.store.create_user(data, Access::Override).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_password_stored_as_hash() {
    let env = setup().await;
    let user = env.user("admin@example.com", UserRole::Admin).await;

    assert_ne!(user.password_hash, "payload");
    let hash = Password::from_hash(user.password_hash);
    assert!(hash.verify("payload", SECRET.as_bytes()));
    assert!(!hash.verify("payload", b"other-secret"));
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn test_post_creation_requires_staff() {
    let env = setup().await;
    let editor = env.user("editor@example.com", UserRole::Editor).await;
    let author = env.author("Evelyn Harper", None).await;

    let result = env
        .store
        .create_post(new_post("Anonymous", author.id, PostStatus::Draft), Access::anonymous())
        .await;
    assert!(matches!(result, Err(AppError::Unauthorized)));

    let result = env
        .store
        .create_post(new_post("Editorial", author.id, PostStatus::Draft), caller(&editor))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_author_delete_requires_admin() {
    let env = setup().await;
    let admin = env.user("admin@example.com", UserRole::Admin).await;
    let editor = env.user("editor@example.com", UserRole::Editor).await;
    let author = env.author("Priya Chandrasekhar", Some(editor.id)).await;

    let result = env
        .store
        .delete(Collection::Authors, author.id, caller(&editor))
        .await;
    assert!(matches!(result, Err(AppError::Forbidden)));

    env.store
        .delete(Collection::Authors, author.id, caller(&admin))
        .await
        .unwrap();
    assert_eq!(env.count(Collection::Authors).await, 0);
}

#[tokio::test]
async fn test_anonymous_readers_only_see_published_posts() {
    let env = setup().await;
    let editor = env.user("editor@example.com", UserRole::Editor).await;
    let author = env.author("Evelyn Harper", None).await;

    for post in [
        new_post("Published", author.id, PostStatus::Published),
        new_post("Draft", author.id, PostStatus::Draft),
    ] {
        env.store.create_post(post, Access::Override).await.unwrap();
    }

    let public = env
        .store
        .find(Collection::Posts, PageRequest::default(), Access::anonymous())
        .await
        .unwrap();
    let titles: Vec<String> = public
        .docs
        .into_iter()
        .filter_map(|doc| match doc {
            Document::Post(post) => Some(post.title),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Published".to_string()]);

    let staff = env
        .store
        .find(Collection::Posts, PageRequest::default(), caller(&editor))
        .await
        .unwrap();
    assert_eq!(staff.total_docs, 2);
}

#[tokio::test]
async fn test_user_listing_requires_admin() {
    let env = setup().await;
    let editor = env.user("editor@example.com", UserRole::Editor).await;

    let result = env
        .store
        .find(Collection::Users, PageRequest::default(), Access::anonymous())
        .await;
    assert!(matches!(result, Err(AppError::Unauthorized)));

    let result = env
        .store
        .find(Collection::Users, PageRequest::default(), caller(&editor))
        .await;
    assert!(matches!(result, Err(AppError::Forbidden)));
}

#[tokio::test]
async fn test_anyone_may_comment() {
    let env = setup().await;
    let author = env.author("Marcus Reed", None).await;
    let post = env
        .store
        .create_post(new_post("Open thread", author.id, PostStatus::Published), Access::Override)
        .await
        .unwrap();

    let comment = NewComment {
        body: "Great piece!".to_string(),
        approved: false,
        post: post.id,
        user: None,
    };
    let created = env
        .store
        .create_comment(comment, Access::anonymous())
        .await
        .unwrap();

    assert_eq!(created.post, post.id);
    assert!(created.user.is_none());
}

#[tokio::test]
async fn test_unapproved_comments_remain_readable() {
    let env = setup().await;
    let author = env.author("Marcus Reed", None).await;
    let post = env
        .store
        .create_post(new_post("Held thread", author.id, PostStatus::Published), Access::Override)
        .await
        .unwrap();

    let comment = NewComment {
        body: "Awaiting review".to_string(),
        approved: false,
        post: post.id,
        user: None,
    };
    env.store
        .create_comment(comment, Access::anonymous())
        .await
        .unwrap();

    let page = env
        .store
        .find(Collection::Comments, PageRequest::default(), Access::anonymous())
        .await
        .unwrap();

    assert_eq!(page.total_docs, 1);
    assert!(matches!(&page.docs[0], Document::Comment(c) if !c.approved));
}

#[tokio::test]
async fn test_user_creation_requires_login() {
    let env = setup().await;
    let editor = env.user("editor@example.com", UserRole::Editor).await;

    let data = |email: &str| NewUser {
        email: email.to_string(),
        password: "payload".to_string(),
        role: UserRole::Editor,
    };

    let result = env
        .store
        .create_user(data("anon@example.com"), Access::anonymous())
        .await;
    assert!(matches!(result, Err(AppError::Unauthorized)));

    let created = env
        .store
        .create_user(data("second@example.com"), caller(&editor))
        .await
        .unwrap();
    assert_eq!(created.email, "second@example.com");
}

// =============================================================================
// Deletion and paging
// =============================================================================

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let env = setup().await;

    let result = env
        .store
        .delete(Collection::Posts, Uuid::new_v4(), Access::Override)
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_pages_report_next_page() {
    let env = setup().await;
    for i in 0..12 {
        env.author(&format!("Author {}", i), None).await;
    }

    let first = env
        .store
        .find(Collection::Authors, PageRequest::new(1, 5), Access::anonymous())
        .await
        .unwrap();
    let last = env
        .store
        .find(Collection::Authors, PageRequest::new(3, 5), Access::anonymous())
        .await
        .unwrap();

    assert_eq!(first.docs.len(), 5);
    assert!(first.has_next_page);
    assert_eq!(last.docs.len(), 2);
    assert!(!last.has_next_page);
    assert_eq!(last.total_pages(), 3);
}

#[tokio::test]
async fn test_clearing_more_than_one_page() {
    let env = setup().await;
    let author = env.author("Evelyn Harper", None).await;
    let post = env
        .store
        .create_post(new_post("Busy thread", author.id, PostStatus::Published), Access::Override)
        .await
        .unwrap();

    for i in 0..120 {
        let comment = NewComment {
            body: format!("Comment {}", i),
            approved: i % 2 == 0,
            post: post.id,
            user: None,
        };
        env.store.create_comment(comment, Access::Override).await.unwrap();
    }

    let seeder = Seeder::new(&env.store, env.dir.path().join("assets"));
    let removed = seeder.clear_collection(Collection::Comments).await.unwrap();

    assert_eq!(removed, 120);
    assert_eq!(env.count(Collection::Comments).await, 0);
}

// =============================================================================
// Media
// =============================================================================

#[tokio::test]
async fn test_media_upload_and_delete() {
    let env = setup().await;
    let source = env.write_asset("team-huddle.gif");

    let first = env
        .store
        .create_media(
            NewMedia {
                alt: "Team aligning in front of a whiteboard".to_string(),
                file_path: source.clone(),
            },
            Access::Override,
        )
        .await
        .unwrap();
    let second = env
        .store
        .create_media(
            NewMedia {
                alt: "Same picture again".to_string(),
                file_path: source,
            },
            Access::Override,
        )
        .await
        .unwrap();

    assert_eq!(first.mime_type, "image/gif");
    assert_eq!(first.url, "https://cms.example.com/media/team-huddle.gif");
    assert_eq!(second.filename, "team-huddle-1.gif");

    let stored = env.dir.path().join("media").join(&first.filename);
    assert!(stored.exists());

    env.store
        .delete(Collection::Media, first.id, Access::Override)
        .await
        .unwrap();
    assert!(!stored.exists());
    assert_eq!(env.count(Collection::Media).await, 1);
}

#[tokio::test]
async fn test_non_image_upload_rejected() {
    let env = setup().await;
    let source = env.dir.path().join("notes.txt");
    std::fs::write(&source, b"not an image").unwrap();

    let result = env
        .store
        .create_media(
            NewMedia {
                alt: "Notes".to_string(),
                file_path: source,
            },
            Access::Override,
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(env.count(Collection::Media).await, 0);
}

#[tokio::test]
async fn test_media_upload_requires_login() {
    let env = setup().await;
    let source = env.write_asset("coffee-chat.gif");

    let result = env
        .store
        .create_media(
            NewMedia {
                alt: "Pouring coffee".to_string(),
                file_path: source,
            },
            Access::anonymous(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}
