//! License file detection
//!
//! Decides whether a path inside a component archive is a license file for
//! that component, taking into account where each ecosystem puts the package
//! root (`package/` for npm tarballs, `<name>-<revision>/` for source
//! archives, ...).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::EntityCoordinates;

static LICENSE_FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:licen[cs]e|copying|copyright|unlicense)(?:[-_][a-z0-9.\-]+)?(?:\.(?:md|markdown|txt|html|rst))?$",
    )
    .expect("license file pattern is valid")
});

/// Directories under which an ecosystem's package root lives
#[must_use]
pub fn license_locations(coordinates: &EntityCoordinates) -> Vec<String> {
    let name = &coordinates.name;
    let revision = &coordinates.revision;
    match coordinates.component_type.as_str() {
        "npm" => vec!["package/".to_string()],
        "maven" => vec!["META-INF/".to_string()],
        "pypi" | "sourcearchive" | "crate" => vec![format!("{name}-{revision}/")],
        "go" => vec![format!("{name}@{revision}/")],
        _ => Vec::new(),
    }
}

/// Path of a license file relative to the package root
///
/// Returns `None` when `path` is not a license file. Root-level license
/// files always qualify; files under an ecosystem location have the location
/// stripped, so the same file in two revisions yields the same key.
#[must_use]
pub fn license_file_key<'a>(path: &'a str, coordinates: &EntityCoordinates) -> Option<&'a str> {
    if LICENSE_FILE_NAME.is_match(&path.to_lowercase()) {
        return Some(path);
    }

    license_locations(coordinates).iter().find_map(|prefix| {
        let rest = strip_prefix_ignore_case(path, prefix)?;
        LICENSE_FILE_NAME.is_match(&rest.to_lowercase()).then_some(rest)
    })
}

/// Whether `path` is a license file for the component at `coordinates`
#[must_use]
pub fn is_license_file(path: &str, coordinates: &EntityCoordinates) -> bool {
    license_file_key(path, coordinates).is_some()
}

fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let head = path.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &path[prefix.len()..])
}
