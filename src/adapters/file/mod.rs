//! File-based revision documents
//!
//! A revision document is the JSON form of a
//! [`ComponentRevision`](crate::core::models::ComponentRevision):
//! `{ "definition": {...}, "harvest": {...} }`.

mod store;

pub use store::RevisionFile;
