//! Storage port — the record store behind the cats endpoints.

use std::future::Future;

use catbox_domain::cat::Cat;
use catbox_domain::error::CatboxError;

/// Append-only collection of [`Cat`] records.
///
/// Records are never updated or removed; `list` returns them in the order
/// they were appended.
pub trait CatRepository {
    /// Add a record to the end of the collection.
    fn append(&self, cat: Cat) -> impl Future<Output = Result<(), CatboxError>> + Send;

    /// Return the full collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Cat>, CatboxError>> + Send;
}

impl<T: CatRepository + Send + Sync> CatRepository for std::sync::Arc<T> {
    fn append(&self, cat: Cat) -> impl Future<Output = Result<(), CatboxError>> + Send {
        (**self).append(cat)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Cat>, CatboxError>> + Send {
        (**self).list()
    }
}
