//! # catbox-adapter-storage-memory
//!
//! Process-local implementation of [`CatRepository`].
//!
//! Records live in a `Vec` for the lifetime of the process and are gone on
//! restart. There is no indexing, no deletion and no uniqueness check.

mod cat_repo;

pub use cat_repo::InMemoryCatRepository;
