//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    LinkCatalog, RedirectResolver, ShortenerSettings, ShorteningService,
};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};

/// Link store behind a trait object, so one state type serves every backend.
pub type DynLinkRepository = dyn LinkRepository;

/// State shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<DynLinkRepository>>,
    pub redirect_resolver: Arc<RedirectResolver<DynLinkRepository>>,
    pub link_catalog: Arc<LinkCatalog<DynLinkRepository>>,
    /// `None` when running without a database.
    pub database: Option<Arc<PgPool>>,
    pub app_env: String,
}

impl AppState {
    /// Wires the services around an explicit store handle.
    pub fn new(
        link_repository: Arc<DynLinkRepository>,
        database: Option<Arc<PgPool>>,
        app_env: impl Into<String>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::with_settings(
                link_repository.clone(),
                settings,
            )),
            redirect_resolver: Arc::new(RedirectResolver::new(link_repository.clone())),
            link_catalog: Arc::new(LinkCatalog::new(link_repository)),
            database,
            app_env: app_env.into(),
        }
    }

    /// State backed by PostgreSQL.
    pub fn postgres(
        pool: Arc<PgPool>,
        app_env: impl Into<String>,
        settings: ShortenerSettings,
    ) -> Self {
        let repository: Arc<DynLinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
        Self::new(repository, Some(pool), app_env, settings)
    }

    /// State backed by an in-memory store; readiness always reports not-ready.
    pub fn in_memory(
        repository: MemoryLinkRepository,
        app_env: impl Into<String>,
        settings: ShortenerSettings,
    ) -> Self {
        Self::new(Arc::new(repository), None, app_env, settings)
    }
}
