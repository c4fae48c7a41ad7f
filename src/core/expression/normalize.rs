//! Identifier tables and normalization
//!
//! Canonical identifiers come from the SPDX license list shipped with the
//! `spdx` crate. The lowercase lookup tables are built once on first use and
//! are read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use spdx::identifiers::{EXCEPTIONS, LICENSES};

use super::parser::parse;
use crate::core::ports::LicenseVisitor;

/// Prefix of user-defined license references
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Identifiers accepted on top of the SPDX list
const EXTRA_IDENTIFIERS: &[&str] = &["NONE"];

/// lowercase identifier -> canonical identifier
static LICENSE_IDS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    LICENSES
        .iter()
        .map(|&(id, _, _)| id)
        .chain(EXTRA_IDENTIFIERS.iter().copied())
        .map(|id| (id.to_lowercase(), id))
        .collect()
});

/// lowercase full name -> identifier, current identifiers winning over deprecated ones
static LICENSE_NAMES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let (deprecated, current): (Vec<_>, Vec<_>) = LICENSES
        .iter()
        .partition(|&&(id, _, _)| spdx::license_id(id).is_some_and(|l| l.is_deprecated()));

    let mut names = HashMap::new();
    for &(id, full_name, _) in deprecated.into_iter().chain(current) {
        names.insert(full_name.to_lowercase(), id);
    }
    names
});

/// lowercase exception -> canonical exception
static EXCEPTION_IDS: Lazy<HashMap<String, &'static str>> =
    Lazy::new(|| EXCEPTIONS.iter().map(|&(id, _)| (id.to_lowercase(), id)).collect());

/// Canonical form of a single license identifier
///
/// Lookup is case-insensitive and ignores surrounding whitespace.
/// `LicenseRef-` references keep their suffix. Returns `None` for blank or
/// unknown input.
#[must_use]
pub fn normalize_single(license: &str) -> Option<String> {
    let trimmed = license.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if let Some(id) = LICENSE_IDS.get(&lowered) {
        return Some((*id).to_string());
    }

    if !lowered.starts_with(&LICENSE_REF_PREFIX.to_lowercase()) {
        return None;
    }
    trimmed
        .get(LICENSE_REF_PREFIX.len()..)
        .filter(|suffix| !suffix.is_empty())
        .map(|suffix| format!("{LICENSE_REF_PREFIX}{suffix}"))
}

/// Identifier for a human-readable license name
///
/// ```
/// assert_eq!(licmatch::core::expression::lookup_by_name("common public license 1.0"), Some("CPL-1.0"));
/// ```
#[must_use]
pub fn lookup_by_name(name: &str) -> Option<&'static str> {
    LICENSE_NAMES.get(&name.trim().to_lowercase()).copied()
}

/// Canonical form of a `WITH` exception identifier
#[must_use]
pub fn normalize_exception(exception: &str) -> Option<String> {
    EXCEPTION_IDS
        .get(&exception.trim().to_lowercase())
        .map(|id| (*id).to_string())
}

/// Canonical form of a whole expression
///
/// Blank input yields `None`. Anything else yields a string; unknown
/// licenses and malformed syntax show up as `NOASSERTION`.
#[must_use]
pub fn normalize(expression: &str) -> Option<String> {
    if expression.trim().is_empty() {
        return None;
    }
    Some(parse(expression, &SpdxVisitor).to_string())
}

/// The default visitor: SPDX identifier lookup, then full-name lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct SpdxVisitor;

impl LicenseVisitor for SpdxVisitor {
    fn visit_license(&self, raw: &str) -> Option<String> {
        normalize_single(raw).or_else(|| lookup_by_name(raw).map(String::from))
    }

    fn visit_exception(&self, raw: &str) -> Option<String> {
        normalize_exception(raw)
    }
}
