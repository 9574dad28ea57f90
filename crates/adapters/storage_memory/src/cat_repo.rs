//! In-memory implementation of [`CatRepository`].

use catbox_app::ports::CatRepository;
use catbox_domain::cat::Cat;
use catbox_domain::error::CatboxError;
use tokio::sync::RwLock;

/// Growable, append-only collection of cats held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCatRepository {
    cats: RwLock<Vec<Cat>>,
}

impl InMemoryCatRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `cats`, in order.
    #[must_use]
    pub fn with_cats(cats: Vec<Cat>) -> Self {
        Self {
            cats: RwLock::new(cats),
        }
    }
}

impl CatRepository for InMemoryCatRepository {
    async fn append(&self, cat: Cat) -> Result<(), CatboxError> {
        self.cats.write().await.push(cat);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Cat>, CatboxError> {
        Ok(self.cats.read().await.clone())
    }
}
