//! Errors raised by content rules: field checks, password handling and
//! access decisions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed a content rule; the message is shown as-is
    #[error("{0}")]
    Validation(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),

    /// No caller, and the rule needs one
    #[error("Authentication required")]
    Unauthorized,

    /// The caller's role or ownership does not satisfy the rule
    #[error("Access denied")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
