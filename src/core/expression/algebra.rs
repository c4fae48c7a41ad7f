//! Expression algebra over disjunctive normal form
//!
//! An expression expands to a list of clauses OR'd together, each clause a
//! sorted set of leaf keys AND'd together. Logically equivalent inputs expand
//! to the same clause list, which is what makes comparing and merging
//! expressions from different sources possible.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::SpdxVisitor;
use super::parser::{ExpressionSource, parse};
use crate::core::models::{Conjunction, LicenseNode, NOASSERTION};

/// AND-clause: sorted, de-duplicated leaf keys
pub type Clause = BTreeSet<String>;

/// OR of AND-clauses
pub type Dnf = Vec<Clause>;

/// How a proposed expression combines with a base expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MergeMode {
    /// Independent observations: add proposed clauses the base lacks
    #[default]
    Or,
    /// Joint facts: cross every base clause with every proposed clause
    And,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => write!(f, "OR"),
            Self::And => write!(f, "AND"),
        }
    }
}

impl FromStr for MergeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OR" => Ok(Self::Or),
            "AND" => Ok(Self::And),
            _ => Err(format!("Invalid merge mode: {s}. Use: OR, AND")),
        }
    }
}

/// Expand an expression to canonical DNF
///
/// Clauses are de-duplicated, empty clauses dropped, and the list sorted
/// with [`compare_rendered`] on each clause's rendering.
pub fn expand<'a>(expression: impl Into<ExpressionSource<'a>>) -> Dnf {
    let tree = parse(expression, &SpdxVisitor);
    canonicalize(expand_node(&tree))
}

fn expand_node(node: &LicenseNode) -> Vec<Clause> {
    match node {
        LicenseNode::NoAssertion => vec![Clause::from([NOASSERTION.to_string()])],
        LicenseNode::Leaf(leaf) => vec![Clause::from([leaf.to_string()])],
        LicenseNode::Binary {
            conjunction: Conjunction::Or,
            left,
            right,
        } => {
            let mut clauses = expand_node(left);
            clauses.extend(expand_node(right));
            clauses
        },
        LicenseNode::Binary {
            conjunction: Conjunction::And,
            left,
            right,
        } => cross(&expand_node(left), &expand_node(right)),
    }
}

fn cross(left: &[Clause], right: &[Clause]) -> Vec<Clause> {
    left.iter()
        .flat_map(|l| right.iter().map(move |r| l.union(r).cloned().collect()))
        .collect()
}

fn canonicalize(clauses: Vec<Clause>) -> Dnf {
    let unique: BTreeSet<Clause> = clauses.into_iter().filter(|c| !c.is_empty()).collect();
    let mut dnf: Dnf = unique.into_iter().collect();
    dnf.sort_by_cached_key(|c| SortKey::new(render_clause(c, true)));
    dnf
}

/// Every license mentioned anywhere in the expression
pub fn flatten<'a>(expression: impl Into<ExpressionSource<'a>>) -> BTreeSet<String> {
    expand(expression).into_iter().flatten().collect()
}

/// Combine a proposed license fact into an existing aggregated expression
///
/// A missing (or blank) side yields the other side verbatim, as does a side
/// that is `NOASSERTION`: any assertion beats "unknown". Otherwise both sides
/// are expanded and combined per `mode`, then rendered by
/// [`stringify_or_ands`].
#[must_use]
pub fn merge(proposed: Option<&str>, base: Option<&str>, mode: MergeMode) -> Option<String> {
    let present = |s: &&str| !s.trim().is_empty();
    let (proposed, base) = match (proposed.filter(present), base.filter(present)) {
        (None, base) => return base.map(String::from),
        (proposed, None) => return proposed.map(String::from),
        (Some(proposed), Some(base)) => (proposed, base),
    };

    if parse(base, &SpdxVisitor).is_no_assertion() {
        return Some(proposed.to_string());
    }
    if parse(proposed, &SpdxVisitor).is_no_assertion() {
        return Some(base.to_string());
    }

    let base_clauses = expand(base);
    let proposed_clauses = expand(proposed);
    let merged = match mode {
        MergeMode::Or => {
            let mut result = base_clauses;
            for clause in proposed_clauses {
                if !result.contains(&clause) {
                    result.push(clause);
                }
            }
            result
        },
        MergeMode::And => cross(&base_clauses, &proposed_clauses),
    };

    log::trace!("merge {proposed:?} into {base:?} ({mode}): {} clause(s)", merged.len());
    Some(stringify_or_ands(&merged))
}

/// Render clauses as an OR of parenthesized AND-groups
///
/// Duplicate clauses are dropped. A single clause renders without
/// parentheses. Multiple clauses are sorted so single-license clauses come
/// before compound ones; the order is cosmetic but deterministic.
#[must_use]
pub fn stringify_or_ands(clauses: &[Clause]) -> String {
    let mut unique: Vec<&Clause> = Vec::with_capacity(clauses.len());
    for clause in clauses.iter().filter(|c| !c.is_empty()) {
        if !unique.contains(&clause) {
            unique.push(clause);
        }
    }

    match unique.as_slice() {
        [] => NOASSERTION.to_string(),
        [only] => render_clause(only, false),
        many => {
            let mut rendered: Vec<String> = many.iter().map(|c| render_clause(c, true)).collect();
            rendered.sort_by(|a, b| compare_rendered(a, b));
            rendered.join(" OR ")
        },
    }
}

fn render_clause(clause: &Clause, parenthesize: bool) -> String {
    let joined = clause.iter().map(String::as_str).collect::<Vec<_>>().join(" AND ");
    if parenthesize && clause.len() > 1 {
        format!("({joined})")
    } else {
        joined
    }
}

/// Order rendered clauses: single licenses first, then compound `( ... )`
/// groups, each alphabetically ignoring case.
#[must_use]
pub fn compare_rendered(a: &str, b: &str) -> Ordering {
    SortKey::new(a.to_string()).cmp(&SortKey::new(b.to_string()))
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    compound: bool,
    folded: String,
    raw: String,
}

impl SortKey {
    fn new(raw: String) -> Self {
        Self {
            compound: raw.starts_with('('),
            folded: raw.to_lowercase(),
            raw,
        }
    }
}

/// Whether `expression` satisfies `constraint`
///
/// True when every clause of the expression contains at least one clause of
/// the constraint.
pub fn satisfies<'a, 'b>(
    expression: impl Into<ExpressionSource<'a>>,
    constraint: impl Into<ExpressionSource<'b>>,
) -> bool {
    let constraint = expand(constraint);
    expand(expression)
        .iter()
        .all(|clause| constraint.iter().any(|required| clause.is_superset(required)))
}
