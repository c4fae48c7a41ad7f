//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use licmatch::core::expression::{MergeMode, merge, normalize, normalize_single};
use licmatch::core::models::EntityCoordinates;
use licmatch::core::services::{Ecosystem, is_license_file, latest_version};
use test_case::test_case;

// =============================================================================
// Normalization Tests
// =============================================================================

#[test_case("mit", Some("MIT") ; "lowercase id")]
#[test_case("APACHE-2.0", Some("Apache-2.0") ; "uppercase id")]
#[test_case("bsd-3-clause", Some("BSD-3-Clause") ; "mixed case id")]
#[test_case("none", Some("NONE") ; "none is an identifier")]
#[test_case("LicenseRef-Acme", Some("LicenseRef-Acme") ; "license ref kept")]
#[test_case("MIT License", None ; "full names are not identifiers")]
#[test_case("", None ; "empty")]
fn test_normalize_single(input: &str, expected: Option<&str>) {
    assert_eq!(normalize_single(input).as_deref(), expected);
}

#[test_case("mit OR apache-2.0", "MIT OR Apache-2.0" ; "or of ids")]
#[test_case("MIT and ISC", "MIT AND ISC" ; "lowercase keyword")]
#[test_case("MIT OR ISC AND Apache-2.0", "MIT OR ISC AND Apache-2.0" ; "and binds tighter")]
#[test_case("(MIT OR ISC) AND Apache-2.0", "(MIT OR ISC) AND Apache-2.0" ; "parens kept where needed")]
#[test_case("((MIT))", "MIT" ; "redundant parens dropped")]
#[test_case("gpl-2.0+", "GPL-2.0+" ; "or later")]
#[test_case("NOASSERTION", "NOASSERTION" ; "sentinel")]
#[test_case("MIT OR", "NOASSERTION" ; "dangling operator")]
fn test_normalize(input: &str, expected: &str) {
    assert_eq!(normalize(input).as_deref(), Some(expected));
}

// =============================================================================
// Merge Tests
// =============================================================================

#[test_case("ISC", "MIT", MergeMode::Or, "ISC OR MIT" ; "or adds alternative")]
#[test_case("ISC", "MIT", MergeMode::And, "ISC AND MIT" ; "and joins")]
#[test_case("MIT", "MIT", MergeMode::Or, "MIT" ; "or with itself")]
#[test_case("MIT", "MIT", MergeMode::And, "MIT" ; "and with itself")]
#[test_case("MIT OR GPL-3.0", "MIT", MergeMode::And, "MIT OR (GPL-3.0 AND MIT)" ; "and distributes")]
#[test_case("NOASSERTION", "ISC", MergeMode::And, "ISC" ; "noassertion proposed")]
fn test_merge(proposed: &str, base: &str, mode: MergeMode, expected: &str) {
    assert_eq!(merge(Some(proposed), Some(base), mode).as_deref(), Some(expected));
}

// =============================================================================
// License File Tests
// =============================================================================

#[test_case("npm", "package/LICENSE", true ; "npm package root")]
#[test_case("npm", "package/lib/LICENSE", false ; "npm nested")]
#[test_case("maven", "META-INF/LICENSE.txt", true ; "maven meta inf")]
#[test_case("crate", "serde-1.0.0/LICENSE-MIT", true ; "crate revision root")]
#[test_case("go", "widget@1.0.0/LICENSE", false ; "go root uses its own name")]
#[test_case("gem", "COPYING.md", true ; "copying")]
#[test_case("gem", "README.md", false ; "readme")]
fn test_is_license_file(kind: &str, path: &str, expected: bool) {
    let coordinates = EntityCoordinates::new(kind, "serde", "1.0.0");
    assert_eq!(is_license_file(path, &coordinates), expected);
}

// =============================================================================
// Ecosystem Tests
// =============================================================================

#[test_case("npm", Ecosystem::Npm ; "npm")]
#[test_case("nuget", Ecosystem::Nuget ; "nuget")]
#[test_case("debsrc", Ecosystem::Debsrc ; "debsrc")]
#[test_case("git", Ecosystem::Other ; "git has no registry data")]
#[test_case("NPM", Ecosystem::Other ; "types are case sensitive")]
fn test_ecosystem_from_type(kind: &str, expected: Ecosystem) {
    assert_eq!(Ecosystem::from_type(kind), expected);
}

#[test_case(&["1.0.0", "1.2.0", "1.1.9"], Some("1.2.0") ; "highest wins")]
#[test_case(&["1.9.0", "1.10.0"], Some("1.10.0") ; "numeric not lexical")]
#[test_case(&["2.0.0-rc.1", "1.5.0"], Some("1.5.0") ; "prerelease skipped")]
#[test_case(&[], None ; "no versions")]
fn test_latest_version(versions: &[&str], expected: Option<&str>) {
    assert_eq!(latest_version(versions.iter().copied()), expected);
}
