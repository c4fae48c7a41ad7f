//! License expression handling
//!
//! - [`parse`] / [`try_parse`] - relaxed parser producing a [`LicenseNode`] tree
//! - [`normalize`] / [`normalize_single`] / [`lookup_by_name`] - canonical identifiers
//! - [`expand`] / [`flatten`] / [`merge`] / [`satisfies`] - DNF algebra
//!
//! Rendering a tree back to text is its `Display` impl; [`stringify`] is a
//! convenience wrapper.
//!
//! None of these functions perform I/O or fail: unknown input becomes
//! `NOASSERTION`.
//!
//! [`LicenseNode`]: crate::core::models::LicenseNode

mod algebra;
mod normalize;
mod parser;
mod token;

pub use algebra::{
    Clause, Dnf, MergeMode, compare_rendered, expand, flatten, merge, satisfies,
    stringify_or_ands,
};
pub use normalize::{
    LICENSE_REF_PREFIX, SpdxVisitor, lookup_by_name, normalize, normalize_exception,
    normalize_single,
};
pub use parser::{ExpressionError, ExpressionSource, MAX_NESTING, MAX_OPERATORS, parse, try_parse};
pub use token::{Span, Token, TokenKind, tokenize};

use crate::core::models::LicenseNode;

/// Canonical text of a tree
#[must_use]
pub fn stringify(node: &LicenseNode) -> String {
    node.to_string()
}
