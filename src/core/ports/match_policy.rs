//! Match policy port
//!
//! Defines the interface for comparing the licensing evidence of two
//! revisions of the same component.

use crate::core::models::{ComponentRevision, MatchResults};

/// A comparator contributing evidence to the license matcher
///
/// Implementations must be pure: no I/O, no shared mutable state.
pub trait MatchPolicy: Send + Sync {
    /// Policy name, recorded on every evidence item
    fn name(&self) -> &str;

    /// Compare `source` against `target`
    ///
    /// Returns the points that agree and the points that disagree. Points
    /// with no data on either side are left out entirely.
    fn compare(&self, source: &ComponentRevision, target: &ComponentRevision) -> MatchResults;
}
