//! Shared application state for axum handlers.

use std::sync::Arc;

use catbox_app::ports::CatRepository;
use catbox_app::services::cat_service::CatService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Cat create/list service.
    pub cat_service: Arc<CatService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            cat_service: Arc::clone(&self.cat_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CatRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(cat_service: CatService<R>) -> Self {
        Self::from_arc(Arc::new(cat_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(cat_service: Arc<CatService<R>>) -> Self {
        Self { cat_service }
    }
}
