//! Access control rules for the content collections.
//!
//! Each predicate looks at the calling user (if any) and answers with an
//! [`AccessDecision`]. Decisions other than `Allow`/`Deny` narrow the set of
//! documents an operation may touch instead of rejecting it outright.

use uuid::Uuid;

use crate::collection::Collection;
use crate::error::{DomainError, DomainResult};
use crate::user::{User, UserRole};

/// Identity of the user performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: UserRole,
}

impl From<&User> for Caller {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

/// How an operation is authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Skip every rule. Used by trusted local tooling such as seeding.
    Override,
    /// Evaluate rules for the given caller; `None` is an anonymous request.
    As(Option<Caller>),
}

impl Access {
    pub fn anonymous() -> Self {
        Access::As(None)
    }

    pub fn caller(caller: Caller) -> Self {
        Access::As(Some(caller))
    }
}

/// Outcome of an access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
    /// Only documents whose owner reference equals this user
    OwnedBy(Option<Uuid>),
    /// Only posts with published status
    PublishedOnly,
}

impl AccessDecision {
    fn from_bool(allowed: bool) -> Self {
        if allowed {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        }
    }

    /// Combine two rules, granting whatever either grants.
    pub fn or(self, other: AccessDecision) -> AccessDecision {
        match (self, other) {
            (AccessDecision::Allow, _) | (_, AccessDecision::Allow) => AccessDecision::Allow,
            (AccessDecision::Deny, other) => other,
            (this, _) => this,
        }
    }

    /// Whether a document with the given owner falls inside this decision.
    pub fn permits_owner(&self, owner: Option<Uuid>) -> bool {
        match self {
            AccessDecision::Allow => true,
            AccessDecision::OwnedBy(Some(id)) => owner == Some(*id),
            _ => false,
        }
    }

    /// Turn a decision that must be unconditional into a result.
    pub fn require(self, caller: Option<&Caller>) -> DomainResult<()> {
        match (self, caller) {
            (AccessDecision::Allow, _) => Ok(()),
            (_, None) => Err(DomainError::Unauthorized),
            (_, Some(_)) => Err(DomainError::Forbidden),
        }
    }
}

/// Access rule signature.
pub type Rule = fn(Option<&Caller>) -> AccessDecision;

pub fn public(_caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::Allow
}

pub fn is_admin(caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::from_bool(caller.is_some_and(|c| c.role == UserRole::Admin))
}

pub fn is_editor(caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::from_bool(caller.is_some_and(|c| c.role == UserRole::Editor))
}

pub fn is_logged_in(caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::from_bool(caller.is_some())
}

pub fn is_admin_or_editor(caller: Option<&Caller>) -> AccessDecision {
    is_admin(caller).or(is_editor(caller))
}

/// Staff see drafts too; everyone else only sees published posts.
pub fn can_read_post(caller: Option<&Caller>) -> AccessDecision {
    match caller {
        Some(c) if c.role.is_staff() => AccessDecision::Allow,
        _ => AccessDecision::PublishedOnly,
    }
}

pub fn can_mutate_author(caller: Option<&Caller>) -> AccessDecision {
    match caller {
        Some(c) if c.role.is_admin() => AccessDecision::Allow,
        _ => AccessDecision::OwnedBy(caller.map(|c| c.id)),
    }
}

pub fn can_read_comment(_caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::Allow
}

pub fn can_update_own_comment(caller: Option<&Caller>) -> AccessDecision {
    AccessDecision::OwnedBy(caller.map(|c| c.id))
}

fn can_update_comment(caller: Option<&Caller>) -> AccessDecision {
    can_update_own_comment(caller).or(is_admin(caller))
}

/// Users may update themselves; the owner of a user document is its own id.
fn can_update_user(caller: Option<&Caller>) -> AccessDecision {
    match caller {
        None => AccessDecision::Deny,
        Some(c) if c.role.is_admin() => AccessDecision::Allow,
        Some(c) => AccessDecision::OwnedBy(Some(c.id)),
    }
}

/// Per-operation rules of one collection.
#[derive(Clone, Copy)]
pub struct CollectionPolicy {
    pub read: Rule,
    pub create: Rule,
    pub update: Rule,
    pub delete: Rule,
}

impl std::fmt::Debug for CollectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionPolicy").finish_non_exhaustive()
    }
}

/// Access rules for a collection.
pub fn collection_policy(collection: Collection) -> CollectionPolicy {
    match collection {
        Collection::Users => CollectionPolicy {
            read: is_admin,
            create: is_logged_in,
            update: can_update_user,
            delete: is_admin,
        },
        Collection::Authors => CollectionPolicy {
            read: public,
            create: is_logged_in,
            update: can_mutate_author,
            delete: is_admin,
        },
        Collection::Posts => CollectionPolicy {
            read: can_read_post,
            create: is_admin_or_editor,
            update: is_admin_or_editor,
            delete: is_admin,
        },
        Collection::Media => CollectionPolicy {
            read: public,
            create: is_logged_in,
            update: is_logged_in,
            delete: is_logged_in,
        },
        Collection::Comments => CollectionPolicy {
            read: can_read_comment,
            create: public,
            update: can_update_comment,
            delete: is_admin,
        },
    }
}
