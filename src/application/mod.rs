//! Application layer services implementing business logic.
//!
//! Services consume the [`LinkRepository`](crate::domain::repositories::LinkRepository)
//! trait and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::slug_generator::SlugGenerator`] - Collision-checked random slugs
//! - [`services::shortening_service::ShorteningService`] - Validate, allocate, persist
//! - [`services::redirect_resolver::RedirectResolver`] - Slug to target with lifecycle policy
//! - [`services::link_catalog::LinkCatalog`] - Link listing

pub mod services;
