//! Match evidence and verdicts
//!
//! Policies emit one evidence item per comparison point. A verdict is built
//! from the concatenated evidence of every policy.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A comparison point where both revisions agree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    /// Policy that produced the evidence
    pub policy: String,
    /// License file the point belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Property compared
    pub prop_path: String,
    /// The shared value
    pub value: Value,
}

/// A comparison point where the revisions disagree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchItem {
    /// Policy that produced the evidence
    pub policy: String,
    /// License file the point belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Property compared
    pub prop_path: String,
    /// Value on the source revision (`null` when absent)
    pub source: Value,
    /// Value on the target revision (`null` when absent)
    pub target: Value,
}

/// Evidence gathered by one or more policies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResults {
    /// Agreeing comparison points
    #[serde(rename = "match", default)]
    pub matches: Vec<MatchItem>,
    /// Disagreeing comparison points
    #[serde(rename = "mismatch", default)]
    pub mismatches: Vec<MismatchItem>,
}

/// `null`, `""`, `[]` and `{}` carry no evidence
#[must_use]
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

impl MatchResults {
    /// No evidence at all
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    /// Compare one point and record the outcome
    ///
    /// Both sides empty: nothing is recorded. Both present and deeply equal:
    /// a match. Anything else is a mismatch.
    pub fn compare(
        &mut self,
        policy: &str,
        file: Option<&str>,
        prop_path: &str,
        source: Option<&Value>,
        target: Option<&Value>,
    ) {
        let source_empty = is_empty_value(source);
        let target_empty = is_empty_value(target);
        if source_empty && target_empty {
            log::trace!("{policy}: no evidence for {prop_path}");
            return;
        }

        let file = file.map(String::from);
        match (source, target) {
            (Some(s), Some(t)) if !source_empty && !target_empty && s == t => {
                log::trace!("{policy}: {prop_path} matches");
                self.matches.push(MatchItem {
                    policy: policy.to_string(),
                    file,
                    prop_path: prop_path.to_string(),
                    value: s.clone(),
                });
            },
            _ => {
                log::trace!("{policy}: {prop_path} differs");
                self.mismatches.push(MismatchItem {
                    policy: policy.to_string(),
                    file,
                    prop_path: prop_path.to_string(),
                    source: source.cloned().unwrap_or(Value::Null),
                    target: target.cloned().unwrap_or(Value::Null),
                });
            },
        }
    }

    /// Append another policy's evidence
    pub fn extend(&mut self, other: Self) {
        self.matches.extend(other.matches);
        self.mismatches.extend(other.mismatches);
    }

    /// True when neither matches nor mismatches were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.mismatches.is_empty()
    }
}

/// Final verdict of the license matcher
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    /// No disagreement and at least one agreeing point
    Matching(Vec<MatchItem>),
    /// Some disagreement, or no evidence at all (empty list)
    NotMatching(Vec<MismatchItem>),
}

impl ProcessResult {
    /// Whether the revisions carry equivalent licensing evidence
    #[must_use]
    pub const fn is_matching(&self) -> bool {
        matches!(self, Self::Matching(_))
    }

    /// Not matching because nothing was comparable, as opposed to a disagreement
    #[must_use]
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Self::NotMatching(items) if items.is_empty())
    }

    /// Agreeing evidence (empty unless matching)
    #[must_use]
    pub fn matches(&self) -> &[MatchItem] {
        match self {
            Self::Matching(items) => items,
            Self::NotMatching(_) => &[],
        }
    }

    /// Disagreeing evidence (empty when matching or inconclusive)
    #[must_use]
    pub fn mismatches(&self) -> &[MismatchItem] {
        match self {
            Self::Matching(_) => &[],
            Self::NotMatching(items) => items,
        }
    }
}

impl Serialize for ProcessResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProcessResult", 2)?;
        state.serialize_field("isMatching", &self.is_matching())?;
        match self {
            Self::Matching(items) => state.serialize_field("match", items)?,
            Self::NotMatching(items) => state.serialize_field("mismatch", items)?,
        }
        state.end()
    }
}
