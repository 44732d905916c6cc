//! PostgreSQL story store for Storyreel.
//!
//! Persists the single `stories` table and implements the
//! [`storyreel_interface::StoryRepository`] contract with Diesel. The two
//! row-mutating validation paths — contribution check-and-increment and the
//! video generation claim — run inside transactions with `FOR UPDATE` row
//! locks, so concurrent submissions cannot oversubscribe contributor slots
//! or double-start a job.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
#[allow(missing_docs)]
pub mod schema;
mod story_repository;

pub use connection::{establish_pool, run_migrations, PgPool};
pub use models::{NewStoryRow, StoryRow};
pub use story_repository::DatabaseStoryRepository;
pub use storyreel_error::{DatabaseError, DatabaseErrorKind};
