//! Sample records written by the seeder.
//!
//! Cross references use natural keys (seed key, email, author name, post
//! title) that the seeder resolves against the documents it created earlier
//! in the same run.

use domain::UserRole;

/// Password shared by every seeded account
pub const SEED_PASSWORD: &str = "payload";

/// 1x1 transparent GIF used for every seeded image
pub const SINGLE_PIXEL_GIF: &str = "R0lGODlhAQABAIAAAAAAAP///ywAAAAAAQABAAACAUwAOw==";

pub struct UserFixture {
    pub email: &'static str,
    pub role: UserRole,
}

pub struct MediaFixture {
    /// Local key other fixtures use to point at this asset
    pub key: &'static str,
    pub filename: &'static str,
    pub alt: &'static str,
}

pub struct AuthorFixture {
    pub name: &'static str,
    pub bio: &'static [&'static str],
    pub avatar_key: &'static str,
    pub user_email: &'static str,
}

pub struct PostFixture {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
    pub categories: &'static str,
    pub cover_key: &'static str,
    pub author_name: &'static str,
    /// Publish date offset into the past
    pub days_ago: i64,
}

pub struct CommentFixture {
    pub body: &'static str,
    pub approved: bool,
    pub post_title: &'static str,
    pub user_email: &'static str,
}

pub const USERS: &[UserFixture] = &[
    UserFixture {
        email: "admin@example.com",
        role: UserRole::Admin,
    },
    UserFixture {
        email: "editor@example.com",
        role: UserRole::Editor,
    },
    UserFixture {
        email: "contributor@example.com",
        role: UserRole::Editor,
    },
];

pub const MEDIA: &[MediaFixture] = &[
    MediaFixture {
        key: "team-huddle",
        filename: "team-huddle.gif",
        alt: "Team aligning in front of a whiteboard",
    },
    MediaFixture {
        key: "coffee-chat",
        filename: "coffee-chat.gif",
        alt: "Pouring coffee before a busy strategy session",
    },
];

pub const AUTHORS: &[AuthorFixture] = &[
    AuthorFixture {
        name: "Evelyn Harper",
        bio: &["Evelyn heads up our client success practice and loves turning messy kickoffs into predictable wins."],
        avatar_key: "team-huddle",
        user_email: "editor@example.com",
    },
    AuthorFixture {
        name: "Marcus Reed",
        bio: &["Marcus keeps our revenue ops humming and shares practical process experiments every month."],
        avatar_key: "coffee-chat",
        user_email: "contributor@example.com",
    },
    AuthorFixture {
        name: "Priya Chandrasekhar",
        bio: &["Priya brings a product lens to service delivery and writes about sustainable growth systems."],
        avatar_key: "team-huddle",
        user_email: "admin@example.com",
    },
];

pub const ONBOARDING_POST: &str = "How We Run Onboarding Sprints That Stick";
pub const REVENUE_POST: &str = "Revenue Ops Metrics That Actually Matter";
pub const PRODUCT_POST: &str = "Why Product Thinking Belongs In Service Firms";

pub const POSTS: &[PostFixture] = &[
    PostFixture {
        title: ONBOARDING_POST,
        excerpt: "A five-day playbook for turning onboarding chaos into a predictable sequence that teams can repeat.",
        body: &[
            "When we first adopted sprint-based onboarding we kept running into the same friction points.",
            "Here is the checklist we now run every single time we start with a new client.",
        ],
        categories: "Operations, Client Success",
        cover_key: "team-huddle",
        author_name: "Evelyn Harper",
        days_ago: 7,
    },
    PostFixture {
        title: REVENUE_POST,
        excerpt: "Stop swimming in dashboards. These four numbers tell you whether your revenue engine is healthy.",
        body: &[
            "A tidy metrics stack is the difference between a gut-feel plan and a disciplined growth engine.",
            "We distilled the list to the four metrics we review every Monday.",
        ],
        categories: "Revenue, Analytics",
        cover_key: "coffee-chat",
        author_name: "Marcus Reed",
        days_ago: 4,
    },
    PostFixture {
        title: PRODUCT_POST,
        excerpt: "Borrow the best bits of product management to make your delivery more resilient and scalable.",
        body: &[
            "Service businesses can borrow product rituals without pretending to ship software.",
            "These are the three rituals that leveled up our retros and roadmap cadence.",
        ],
        categories: "Product, Strategy",
        cover_key: "team-huddle",
        author_name: "Priya Chandrasekhar",
        days_ago: 2,
    },
];

pub const COMMENTS: &[CommentFixture] = &[
    CommentFixture {
        body: "Loved this breakdown—we stole your kickoff checklist immediately.",
        approved: true,
        post_title: ONBOARDING_POST,
        user_email: "editor@example.com",
    },
    CommentFixture {
        body: "Your Monday metric stack saved us hours. Great piece!",
        approved: true,
        post_title: REVENUE_POST,
        user_email: "contributor@example.com",
    },
    CommentFixture {
        body: "Curious how you set expectations with clients before the sprint starts.",
        approved: false,
        post_title: ONBOARDING_POST,
        user_email: "admin@example.com",
    },
];
