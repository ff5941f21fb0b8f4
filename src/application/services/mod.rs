//! Business logic services for the application layer.

pub mod link_catalog;
pub mod redirect_resolver;
pub mod shortening_service;
pub mod slug_generator;

pub use link_catalog::LinkCatalog;
pub use redirect_resolver::{NotFoundReason, RedirectResolver, Resolution};
pub use shortening_service::{
    ShortenError, ShortenedLink, ShortenerSettings, ShorteningService, UrlValidationError,
};
pub use slug_generator::{SlugError, SlugGenerator};
