//! Port traits (interfaces) for pluggable behavior
//!
//! These traits define the seams of the core: how license leaves are
//! corrected while parsing, and how two component revisions are compared.
//!
//! Concrete implementations live next to the logic that uses them
//! ([`crate::core::expression::SpdxVisitor`], the policies in
//! [`crate::core::services`]). Tests plug in their own.

mod license_visitor;
mod match_policy;

pub use license_visitor::{IdentityVisitor, LicenseVisitor};
pub use match_policy::MatchPolicy;
