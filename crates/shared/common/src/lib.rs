//! Common utilities shared across the content workspace.
//!
//! This crate provides:
//! - Unified error handling for services and tooling
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
