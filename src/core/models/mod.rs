//! Domain models for licmatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`LicenseNode`] - Parsed license expression tree
//! - [`ComponentRevision`] - Definition plus harvest for one component revision
//! - [`MatchResults`] - Evidence produced by match policies
//! - [`ProcessResult`] - Verdict of the license matcher

mod definition;
mod evidence;
mod expression;

pub use definition::{
    ComponentRevision, Definition, DefinitionFile, EntityCoordinates, Hashes, HarvestBag,
};
pub use evidence::{MatchItem, MatchResults, MismatchItem, ProcessResult, is_empty_value};
pub use expression::{Conjunction, LicenseLeaf, LicenseNode, NOASSERTION};
