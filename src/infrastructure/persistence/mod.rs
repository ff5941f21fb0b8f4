//! Link store implementations and database bootstrap.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage, one transaction per operation
//! - [`MemoryLinkRepository`] - In-process storage for database-less runs and tests
//!
//! [`database`] owns pool construction, migrations and the readiness ping.

pub mod database;
pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
