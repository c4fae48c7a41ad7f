//! Tests for the license matcher and its policies

use licmatch::config::MatcherConfig;
use licmatch::core::models::{ComponentRevision, MatchItem, MatchResults, MismatchItem, ProcessResult};
use licmatch::core::ports::MatchPolicy;
use licmatch::core::services::{LicenseMatcher, decide};
use proptest::prelude::*;
use serde_json::{Value, json};

use crate::common::RevisionBuilder;

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_npm_declared_license_match() {
    let source = RevisionBuilder::new("npm", "left-pad", "1.3.0")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();
    let target = RevisionBuilder::new("npm", "left-pad", "1.3.1")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();

    let verdict = LicenseMatcher::default().process(&source, &target);
    assert!(verdict.is_matching());
    assert_eq!(verdict.matches().len(), 1);
    assert_eq!(verdict.matches()[0].prop_path, "registryData.manifest.license");
}

#[test]
fn test_nuget_github_url_only_is_inconclusive() {
    let url = "https://github.com/owner/widget/blob/main/LICENSE";
    let source = RevisionBuilder::new("nuget", "Widget", "1.0.0")
        .harvest("1.5.0", json!({ "manifest": { "licenseUrl": url } }))
        .build();
    let target = RevisionBuilder::new("nuget", "Widget", "1.1.0")
        .harvest("1.5.0", json!({ "manifest": { "licenseUrl": url } }))
        .build();

    let verdict = LicenseMatcher::default().process(&source, &target);
    assert!(!verdict.is_matching());
    assert!(verdict.is_inconclusive());
}

#[test]
fn test_nuget_expression_still_counts() {
    let url = "https://aka.ms/deprecateLicenseUrl";
    let source = RevisionBuilder::new("nuget", "Widget", "1.0.0")
        .harvest("1.5.0", json!({ "manifest": { "licenseUrl": url, "licenseExpression": "MIT" } }))
        .build();
    let target = RevisionBuilder::new("nuget", "Widget", "1.1.0")
        .harvest("1.5.0", json!({ "manifest": { "licenseUrl": url, "licenseExpression": "MIT" } }))
        .build();

    let verdict = LicenseMatcher::default().process(&source, &target);
    assert!(verdict.is_matching());
    assert_eq!(verdict.matches().len(), 1);
    assert_eq!(verdict.matches()[0].prop_path, "manifest.licenseExpression");
}

#[test]
fn test_renamed_license_file_matches() {
    let source = RevisionBuilder::new("gem", "widget", "1.0.0")
        .license_file("LICENSE", "abc123", "tok")
        .build();
    let target = RevisionBuilder::new("gem", "widget", "2.0.0")
        .license_file("LICENSE.txt", "abc123", "tok")
        .build();

    let verdict = LicenseMatcher::default().process(&source, &target);
    assert!(verdict.is_matching());
    let props: Vec<&str> = verdict.matches().iter().map(|m| m.prop_path.as_str()).collect();
    assert_eq!(props, vec!["hashes.sha256", "token"]);
    assert!(verdict.matches().iter().all(|m| m.file.as_deref() == Some("LICENSE.txt")));
}

#[test]
fn test_one_disagreement_vetoes_everything() {
    let source = RevisionBuilder::new("npm", "left-pad", "1.3.0")
        .license_file("package/LICENSE", "abc", "tok-a")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();
    let target = RevisionBuilder::new("npm", "left-pad", "1.3.1")
        .license_file("package/LICENSE", "abc", "tok-b")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();

    let verdict = LicenseMatcher::default().process(&source, &target);
    assert!(!verdict.is_matching());
    assert_eq!(verdict.mismatches().len(), 1);
    assert_eq!(verdict.mismatches()[0].prop_path, "token");
    assert_eq!(verdict.mismatches()[0].source, json!("tok-a"));
}

#[test]
fn test_latest_harvest_version_is_used() {
    let source = RevisionBuilder::new("npm", "left-pad", "1.3.0")
        .harvest("1.2.0", json!({ "registryData": { "manifest": { "license": "ISC" } } }))
        .harvest("1.10.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();
    let target = RevisionBuilder::new("npm", "left-pad", "1.3.1")
        .harvest("1.10.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();

    assert!(LicenseMatcher::default().process(&source, &target).is_matching());
}

#[test]
fn test_non_license_files_give_no_evidence() {
    let source = RevisionBuilder::new("gem", "widget", "1.0.0").plain_file("lib/widget.rb").build();
    let target = RevisionBuilder::new("gem", "widget", "1.0.1").plain_file("lib/widget.rb").build();

    assert!(LicenseMatcher::default().process(&source, &target).is_inconclusive());
}

#[test]
fn test_harvest_policy_disabled_by_config() {
    let source = RevisionBuilder::new("npm", "left-pad", "1.3.0")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();
    let target = source.clone();

    let config = MatcherConfig {
        harvest_policy: false,
        ..MatcherConfig::default()
    };
    let verdict = LicenseMatcher::from_config(&config).process(&source, &target);
    assert!(verdict.is_inconclusive());
}

#[test]
fn test_verdict_serialization_contract() {
    let source = RevisionBuilder::new("npm", "left-pad", "1.3.0")
        .harvest("1.5.0", json!({ "registryData": { "manifest": { "license": "MIT" } } }))
        .build();

    let verdict = LicenseMatcher::default().process(&source, &source.clone());
    assert_eq!(
        serde_json::to_value(&verdict).unwrap(),
        json!({
            "isMatching": true,
            "match": [{ "policy": "harvest", "propPath": "registryData.manifest.license", "value": "MIT" }]
        })
    );
}

// =============================================================================
// CONSERVATISM
// =============================================================================

/// A policy that reports a fixed amount of evidence
struct FixedPolicy {
    matches: usize,
    mismatches: usize,
}

impl MatchPolicy for FixedPolicy {
    fn name(&self) -> &str {
        "fixed"
    }

    fn compare(&self, _source: &ComponentRevision, _target: &ComponentRevision) -> MatchResults {
        MatchResults {
            matches: (0..self.matches)
                .map(|i| MatchItem {
                    policy: "fixed".to_string(),
                    file: None,
                    prop_path: format!("p{i}"),
                    value: json!(i),
                })
                .collect(),
            mismatches: (0..self.mismatches)
                .map(|i| MismatchItem {
                    policy: "fixed".to_string(),
                    file: None,
                    prop_path: format!("q{i}"),
                    source: json!(i),
                    target: Value::Null,
                })
                .collect(),
        }
    }
}

proptest! {
    /// Any mismatch, or no evidence at all, means not matching
    #[test]
    fn matcher_is_conservative(evidence in prop::collection::vec((0usize..3, 0usize..3), 0..4)) {
        let policies: Vec<Box<dyn MatchPolicy>> = evidence
            .iter()
            .map(|&(matches, mismatches)| Box::new(FixedPolicy { matches, mismatches }) as Box<dyn MatchPolicy>)
            .collect();
        let total_matches: usize = evidence.iter().map(|e| e.0).sum();
        let total_mismatches: usize = evidence.iter().map(|e| e.1).sum();

        let revision = ComponentRevision::default();
        let verdict = LicenseMatcher::new(policies).process(&revision, &revision);

        prop_assert_eq!(verdict.is_matching(), total_mismatches == 0 && total_matches > 0);
        match verdict {
            ProcessResult::Matching(items) => {
                prop_assert_eq!(items.len(), total_matches);
            },
            ProcessResult::NotMatching(items) => {
                prop_assert_eq!(items.len(), total_mismatches);
            },
        }
    }
}

#[test]
fn test_decide_keeps_mismatch_list() {
    let results = MatchResults {
        matches: Vec::new(),
        mismatches: vec![MismatchItem {
            policy: "harvest".to_string(),
            file: None,
            prop_path: "registryData.license".to_string(),
            source: json!("MIT"),
            target: json!("ISC"),
        }],
    };
    assert_eq!(decide(results.clone()).mismatches(), results.mismatches.as_slice());
}
