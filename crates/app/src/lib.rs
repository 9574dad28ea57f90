//! # catbox-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatRepository` — append & list cat records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatService` — create, find all
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `catbox-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
