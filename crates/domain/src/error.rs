//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatboxError`] via `From`.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum CatboxError {
    /// The backing record store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
