//! # catbox-domain
//!
//! Pure domain model for the catbox demo service.
//!
//! ## Responsibilities
//! - Define the **Cat** record accepted by `POST /cats/create` and returned
//!   by `GET /cats/findAll`
//! - Define the **update DTO** accepted (and only logged) by `PUT /cats/update/:id`
//! - Foundational error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod cat;
pub mod error;
