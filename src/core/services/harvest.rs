//! Harvest bag access
//!
//! Helpers for picking the most recent output of a harvest tool and for
//! reading dotted property paths out of it.

use semver::Version;
use serde_json::Value;

use crate::core::models::HarvestBag;

/// Tool whose output carries ecosystem registry metadata
pub const CLEARLYDEFINED_TOOL: &str = "clearlydefined";

/// Pick the latest version among `versions`
///
/// Versions are compared as semver. Pre-releases and strings that are not
/// semver never replace a valid release. `1` and `1.2` are read as `1.0.0`
/// and `1.2.0`. When nothing parses, the first version is returned.
pub fn latest_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut versions = versions.into_iter();
    let first = versions.next()?;
    let mut best = (first, release_version(first));

    for candidate in versions {
        let Some(parsed) = release_version(candidate) else {
            continue;
        };
        let newer = match &best.1 {
            Some(current) => parsed > *current,
            None => true,
        };
        if newer {
            best = (candidate, Some(parsed));
        }
    }
    Some(best.0)
}

fn release_version(version: &str) -> Option<Version> {
    let trimmed = version.trim();
    let parsed = Version::parse(trimmed).ok().or_else(|| {
        let parts: Vec<&str> = trimmed.split('.').collect();
        let numeric = parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
        if !numeric {
            return None;
        }
        match parts.as_slice() {
            [major] => Version::parse(&format!("{major}.0.0")).ok(),
            [major, minor] => Version::parse(&format!("{major}.{minor}.0")).ok(),
            _ => None,
        }
    })?;
    parsed.pre.is_empty().then_some(parsed)
}

/// The output of `tool` at its latest version, if the tool ran at all
#[must_use]
pub fn latest_tool_harvest<'a>(harvest: &'a HarvestBag, tool: &str) -> Option<&'a Value> {
    let versions = harvest.get(tool)?;
    let latest = latest_version(versions.keys().map(String::as_str))?;
    log::trace!("latest {tool} harvest is {latest}");
    versions.get(latest)
}

/// Read a dotted property path such as `registryData.manifest.license`
///
/// Numeric segments index into arrays. The path is turned into a JSON
/// pointer, so segments may hold `/` or `~`.
#[must_use]
pub fn value_at<'a>(value: &'a Value, prop_path: &str) -> Option<&'a Value> {
    let pointer: String = prop_path
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect();
    value.pointer(&pointer)
}
