//! Cat service — use-cases behind the `/cats` endpoints.

use catbox_domain::cat::Cat;
use catbox_domain::error::CatboxError;

use crate::ports::CatRepository;

/// Application service for creating and listing cats.
pub struct CatService<R> {
    repo: R,
}

impl<R: CatRepository> CatService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new cat record.
    ///
    /// No validation is applied: whatever object the caller sent is kept.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, cat), fields(cat_name = cat.name().unwrap_or_default()))]
    pub async fn create(&self, cat: Cat) -> Result<(), CatboxError> {
        self.repo.append(cat).await?;
        tracing::debug!("cat appended");
        Ok(())
    }

    /// List every cat created since the process started.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Cat>, CatboxError> {
        self.repo.list().await
    }
}
