//! Seeding of sample content.

pub mod fixtures;
mod seeder;

pub use seeder::{SeedReport, SeededMedia, Seeder, CLEAR_ORDER, CLEAR_PAGE_SIZE};
