//! Tests for parsing, stringifying and normalizing expressions

use licmatch::core::expression::{
    ExpressionError, SpdxVisitor, lookup_by_name, normalize, parse, stringify, try_parse,
};
use licmatch::core::models::{LicenseLeaf, LicenseNode, NOASSERTION};
use licmatch::core::ports::IdentityVisitor;

// =============================================================================
// PARSE + STRINGIFY
// =============================================================================

#[test]
fn test_parse_then_stringify_canonicalizes_case() {
    let tree = parse("mit OR apache-2.0", &SpdxVisitor);
    assert_eq!(stringify(&tree), "MIT OR Apache-2.0");
}

#[test]
fn test_parse_builds_expected_tree() {
    let tree = parse("MIT AND (ISC OR Apache-2.0)", &SpdxVisitor);
    let expected = LicenseNode::and(
        LicenseLeaf::new("MIT").into(),
        LicenseNode::or(LicenseLeaf::new("ISC").into(), LicenseLeaf::new("Apache-2.0").into()),
    );
    assert_eq!(tree, expected);
    assert_eq!(stringify(&tree), "MIT AND (ISC OR Apache-2.0)");
}

#[test]
fn test_parse_accepts_existing_tree() {
    let tree = parse("MIT OR ISC", &SpdxVisitor);
    assert_eq!(parse(&tree, &SpdxVisitor), tree);
}

#[test]
fn test_plus_and_exception() {
    let tree = parse("gpl-2.0+ with classpath-exception-2.0", &SpdxVisitor);
    assert_eq!(stringify(&tree), "GPL-2.0+ WITH Classpath-exception-2.0");
}

#[test]
fn test_unknown_exception_renders_noassertion() {
    assert_eq!(normalize("GPL-3.0-or-later WITH not-an-exception"), Some(NOASSERTION.to_string()));
}

#[test]
fn test_identity_visitor_keeps_raw_text() {
    let tree = parse("whatever AND something-else", &IdentityVisitor);
    assert_eq!(stringify(&tree), "whatever AND something-else");
}

// =============================================================================
// DEGRADATION
// =============================================================================

#[test]
fn test_malformed_input_is_noassertion() {
    for input in ["(MIT", "MIT OR", "AND", "MIT ISC )", "MIT WITH"] {
        assert_eq!(parse(input, &SpdxVisitor), LicenseNode::NoAssertion, "input={input:?}");
    }
}

#[test]
fn test_try_parse_reports_cause() {
    assert!(matches!(try_parse("", &SpdxVisitor), Err(ExpressionError::Empty)));
    assert!(matches!(try_parse("(MIT", &SpdxVisitor), Err(ExpressionError::Unclosed(_))));
    assert!(matches!(try_parse("MIT OR", &SpdxVisitor), Err(ExpressionError::UnexpectedEnd)));
    assert!(matches!(try_parse("MIT WITH", &SpdxVisitor), Err(ExpressionError::MissingException(_))));
}

#[test]
fn test_unknown_license_inside_expression() {
    assert_eq!(normalize("MIT OR not-a-license"), Some("MIT OR NOASSERTION".to_string()));
}

// =============================================================================
// NORMALIZE + LOOKUP
// =============================================================================

#[test]
fn test_normalize_blank_is_none() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("   "), None);
}

#[test]
fn test_normalize_full_names() {
    assert_eq!(normalize("Apache License 2.0 OR mit"), Some("Apache-2.0 OR MIT".to_string()));
}

#[test]
fn test_normalize_license_ref() {
    assert_eq!(normalize("licenseref-acme AND mit"), Some("LicenseRef-acme AND MIT".to_string()));
}

#[test]
fn test_lookup_by_name() {
    assert_eq!(lookup_by_name("MIT License"), Some("MIT"));
    assert_eq!(lookup_by_name("apache license 2.0"), Some("Apache-2.0"));
    assert_eq!(lookup_by_name("Definitely Not A License"), None);
}
