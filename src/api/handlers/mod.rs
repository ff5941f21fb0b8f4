//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod root;
pub mod shorten;

pub use health::{env_handler, health_handler, readiness_handler};
pub use links::list_links_handler;
pub use redirect::redirect_handler;
pub use root::{fallback_handler, root_handler};
pub use shorten::shorten_handler;
