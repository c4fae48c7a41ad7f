//! Definition match policy
//!
//! Compares the license files of two revisions by identity: the content
//! hashes and the license text token. Files are paired by path, then by
//! their path relative to the package root, and left-over files that share
//! content are paired as renames.

use serde_json::Value;

use super::license_files::license_file_key;
use crate::core::models::{ComponentRevision, Definition, DefinitionFile, MatchResults};
use crate::core::ports::MatchPolicy;

/// Policy name recorded on definition evidence
pub const DEFINITION_POLICY: &str = "definition";

/// Properties compared on every license file pair, each its own point
pub const IDENTITY_PROPS: [&str; 3] = ["hashes.sha1", "hashes.sha256", "token"];

// Strongest identity first
const RENAME_PROPS: [&str; 3] = ["hashes.sha256", "hashes.sha1", "token"];

/// Compares license file identity between two revisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinitionLicenseMatchPolicy;

impl DefinitionLicenseMatchPolicy {
    /// Create the policy
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MatchPolicy for DefinitionLicenseMatchPolicy {
    fn name(&self) -> &str {
        DEFINITION_POLICY
    }

    fn compare(&self, source: &ComponentRevision, target: &ComponentRevision) -> MatchResults {
        let pairs = pair_license_files(&source.definition, &target.definition);

        let mut results = MatchResults::new();
        for pair in &pairs {
            let file = pair.label();
            for prop in IDENTITY_PROPS {
                let s = identity_value(pair.source, prop);
                let t = identity_value(pair.target, prop);
                results.compare(DEFINITION_POLICY, Some(file), prop, s.as_ref(), t.as_ref());
            }
        }

        log::debug!(
            "{DEFINITION_POLICY}: {} license file pair(s), {} match, {} mismatch",
            pairs.len(),
            results.matches.len(),
            results.mismatches.len()
        );
        results
    }
}

/// License files of the two revisions that describe the same thing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LicenseFilePair<'a> {
    /// File in the source revision
    pub source: Option<&'a DefinitionFile>,
    /// File in the target revision
    pub target: Option<&'a DefinitionFile>,
    /// Paired by shared content after the paths failed to line up
    pub renamed: bool,
}

impl<'a> LicenseFilePair<'a> {
    /// Path reported on evidence: the target path for renames, otherwise
    /// whichever side is present (source first)
    #[must_use]
    pub fn label(&self) -> &'a str {
        let preferred = if self.renamed {
            self.target.or(self.source)
        } else {
            self.source.or(self.target)
        };
        preferred.map_or("", |file| file.path.as_str())
    }
}

fn identity_value(file: Option<&DefinitionFile>, prop: &str) -> Option<Value> {
    file.and_then(|f| f.identity(prop)).map(|value| Value::String(value.to_string()))
}

/// A license file with its key relative to the package root
#[derive(Debug, Clone, Copy)]
struct LicenseFile<'a> {
    file: &'a DefinitionFile,
    key: &'a str,
}

fn license_files(definition: &Definition) -> Vec<LicenseFile<'_>> {
    let mut files: Vec<_> = definition
        .files
        .iter()
        .filter_map(|file| {
            license_file_key(&file.path, &definition.coordinates).map(|key| LicenseFile { file, key })
        })
        .collect();
    files.sort_by(|a, b| (a.key, a.file.path.as_str()).cmp(&(b.key, b.file.path.as_str())));
    files
}

type SameFile = for<'x> fn(&LicenseFile<'x>, &LicenseFile<'x>) -> bool;

fn same_path(source: &LicenseFile<'_>, target: &LicenseFile<'_>) -> bool {
    source.file.path == target.file.path
}

fn same_key(source: &LicenseFile<'_>, target: &LicenseFile<'_>) -> bool {
    source.key == target.key
}

fn same_file_content(source: &LicenseFile<'_>, target: &LicenseFile<'_>) -> bool {
    same_content(source.file, target.file)
}

/// Pair the license files of two definitions
///
/// Every license file of either revision ends up in exactly one pair.
/// Files are paired by identical path first, then by [`license_file_key`]
/// against their own revision's coordinates. Source-only and target-only
/// files sharing a non-empty `sha256`, `sha1` or `token` are then paired as
/// renames, and whatever is left is reported unpaired.
#[must_use]
pub fn pair_license_files<'a>(source: &'a Definition, target: &'a Definition) -> Vec<LicenseFilePair<'a>> {
    let mut source_files = license_files(source);
    let mut target_files = license_files(target);
    let mut pairs = Vec::with_capacity(source_files.len().max(target_files.len()));

    let by_path: SameFile = same_path;
    let by_key: SameFile = same_key;
    let by_content: SameFile = same_file_content;
    for (same, renamed) in [(by_path, false), (by_key, false), (by_content, true)] {
        pair_off(&mut source_files, &mut target_files, same, renamed, &mut pairs);
    }

    pairs.extend(source_files.into_iter().map(|left| LicenseFilePair {
        source: Some(left.file),
        target: None,
        renamed: false,
    }));
    pairs.extend(target_files.into_iter().map(|left| LicenseFilePair {
        source: None,
        target: Some(left.file),
        renamed: false,
    }));
    pairs
}

fn pair_off<'a>(
    source_files: &mut Vec<LicenseFile<'a>>,
    target_files: &mut Vec<LicenseFile<'a>>,
    same: SameFile,
    renamed: bool,
    pairs: &mut Vec<LicenseFilePair<'a>>,
) {
    let mut unpaired = Vec::with_capacity(source_files.len());
    for source_file in source_files.drain(..) {
        let found = target_files.iter().position(|target_file| same(&source_file, target_file));
        match found.map(|index| target_files.remove(index)) {
            Some(target_file) => {
                if renamed {
                    log::debug!("license file renamed: {} -> {}", source_file.file.path, target_file.file.path);
                }
                pairs.push(LicenseFilePair {
                    source: Some(source_file.file),
                    target: Some(target_file.file),
                    renamed,
                });
            },
            None => unpaired.push(source_file),
        }
    }
    *source_files = unpaired;
}

fn same_content(source: &DefinitionFile, target: &DefinitionFile) -> bool {
    RENAME_PROPS.iter().any(|prop| {
        matches!((source.identity(prop), target.identity(prop)), (Some(s), Some(t)) if s == t)
    })
}
