//! # catbox-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Register the `/cats` routes, each one binding a method + path template
//!   to a handler and its typed extractors (path params, query map, JSON
//!   body, or the whole request)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or text)
//!
//! ## Dependency rule
//! Depends on `catbox-app` (for port traits and services) and `catbox-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

#[allow(clippy::missing_errors_doc)]
pub mod cats;
pub mod error;
pub mod router;
pub mod state;
