//! Repository layer for data access.

pub mod entities;
mod document_store;
mod pagination;

pub use document_store::{CollectionStore, DocumentStore};
pub use pagination::{Page, PageRequest};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use document_store::MockDocumentStore;
