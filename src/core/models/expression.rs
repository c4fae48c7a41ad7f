//! License expression tree
//!
//! A parsed SPDX-style expression is a binary tree of `AND`/`OR` nodes over
//! license leaves. Anything that could not be understood is represented by
//! [`LicenseNode::NoAssertion`] instead of an error, so "we don't know" flows
//! through every later operation.
//!
//! Rendering a node (via [`std::fmt::Display`]) is the canonical stringify
//! step: re-parsing the output yields the same tree shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for an unknown or unparsable license
pub const NOASSERTION: &str = "NOASSERTION";

/// Boolean operator joining two sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    /// Both sides apply
    And,
    /// Either side may be chosen
    Or,
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

/// A single license reference, e.g. `GPL-2.0+ WITH Classpath-exception-2.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseLeaf {
    /// License identifier
    pub license: String,
    /// "Or any later version" (`+` suffix)
    #[serde(default)]
    pub plus: bool,
    /// Optional `WITH` exception
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl LicenseLeaf {
    /// Create a plain leaf with no `+` and no exception
    #[must_use]
    pub fn new(license: impl Into<String>) -> Self {
        Self {
            license: license.into(),
            plus: false,
            exception: None,
        }
    }

    /// Mark the leaf as "or later"
    #[must_use]
    pub const fn or_later(mut self) -> Self {
        self.plus = true;
        self
    }

    /// Attach a `WITH` exception
    #[must_use]
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// An exception that failed normalization poisons the whole leaf
    #[must_use]
    pub fn is_no_assertion(&self) -> bool {
        self.license == NOASSERTION || self.exception.as_deref() == Some(NOASSERTION)
    }
}

impl fmt::Display for LicenseLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_no_assertion() {
            return f.write_str(NOASSERTION);
        }
        f.write_str(&self.license)?;
        if self.plus {
            f.write_str("+")?;
        }
        if let Some(exception) = &self.exception {
            write!(f, " WITH {exception}")?;
        }
        Ok(())
    }
}

/// Node of a license expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LicenseNode {
    /// A single license
    Leaf(LicenseLeaf),
    /// Two sub-expressions joined by `AND` or `OR`
    Binary {
        /// Operator
        conjunction: Conjunction,
        /// Left operand
        left: Box<Self>,
        /// Right operand
        right: Box<Self>,
    },
    /// Unknown or unparsable input
    NoAssertion,
}

impl LicenseNode {
    /// Leaf node for a license identifier
    #[must_use]
    pub fn leaf(license: impl Into<String>) -> Self {
        Self::Leaf(LicenseLeaf::new(license))
    }

    /// `left AND right`
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(Conjunction::And, left, right)
    }

    /// `left OR right`
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(Conjunction::Or, left, right)
    }

    /// Join two nodes with the given conjunction
    #[must_use]
    pub fn binary(conjunction: Conjunction, left: Self, right: Self) -> Self {
        Self::Binary {
            conjunction,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// True when the whole expression is the no-assertion sentinel
    #[must_use]
    pub fn is_no_assertion(&self) -> bool {
        match self {
            Self::NoAssertion => true,
            Self::Leaf(leaf) => leaf.is_no_assertion(),
            Self::Binary { .. } => false,
        }
    }

    /// Conjunction of this node, if it is a binary node
    #[must_use]
    pub const fn conjunction(&self) -> Option<Conjunction> {
        match self {
            Self::Binary { conjunction, .. } => Some(*conjunction),
            _ => None,
        }
    }

    /// Leaves in left-to-right order. `NoAssertion` nodes contribute nothing.
    #[must_use]
    pub fn leaves(&self) -> Vec<&LicenseLeaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a LicenseLeaf>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Binary { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            },
            Self::NoAssertion => {},
        }
    }

    /// Depth of the tree (a leaf has depth 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            _ => 1,
        }
    }

    fn fmt_operand(&self, parent: Conjunction, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // OR binds looser than AND
        if parent == Conjunction::And && self.conjunction() == Some(Conjunction::Or) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for LicenseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAssertion => f.write_str(NOASSERTION),
            Self::Leaf(leaf) => write!(f, "{leaf}"),
            Self::Binary {
                conjunction,
                left,
                right,
            } => {
                left.fmt_operand(*conjunction, f)?;
                write!(f, " {conjunction} ")?;
                right.fmt_operand(*conjunction, f)
            },
        }
    }
}

impl From<LicenseLeaf> for LicenseNode {
    fn from(leaf: LicenseLeaf) -> Self {
        Self::Leaf(leaf)
    }
}
