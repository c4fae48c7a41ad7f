//! licmatch - License expression algebra and cross-revision license matching
//!
//! This library parses and normalizes SPDX-like license expressions, merges
//! license facts in disjunctive normal form, and decides whether two
//! revisions of a component carry the same licensing evidence.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::core::expression::{
    MergeMode, expand, flatten, lookup_by_name, merge, normalize, normalize_single, parse,
    satisfies, stringify,
};
pub use crate::core::models::{ComponentRevision, LicenseNode, ProcessResult};
pub use crate::core::services::LicenseMatcher;
pub use error::{Error, Result};
