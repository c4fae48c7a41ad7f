//! Tests for global configuration management

use std::fs;

use licmatch::config::{GlobalConfig, HarvestConfig, MatcherConfig};
use licmatch::core::services::LicenseMatcher;
use licmatch::error::Error;

use crate::common::TestDir;

// =============================================================================
// LOAD / SAVE
// =============================================================================

#[test]
fn test_save_then_load() {
    let dir = TestDir::new();
    let path = dir.path().join("nested/config.toml");

    let config = GlobalConfig {
        matcher: MatcherConfig {
            definition_policy: false,
            harvest_policy: true,
            harvest: HarvestConfig {
                tool: "scancode".to_string(),
                mutable_license_url_hosts: vec!["gitlab.com".to_string()],
            },
        },
    };
    config.save_to(&path).unwrap();

    assert_eq!(GlobalConfig::load_from(&path).unwrap(), config);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[matcher.harvest]"));
}

#[test]
fn test_load_from_partial_file() {
    let dir = TestDir::new();
    let path = dir.write("config.toml", "[matcher.harvest]\ntool = \"scancode\"\n");

    let config = GlobalConfig::load_from(&path).unwrap();
    assert!(config.matcher.definition_policy);
    assert_eq!(config.matcher.harvest.tool, "scancode");
    assert!(config.matcher.harvest.mutable_license_url_hosts.contains(&"aka.ms".to_string()));
}

#[test]
fn test_load_from_missing_file() {
    let dir = TestDir::new();
    let err = GlobalConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_from_invalid_file() {
    let dir = TestDir::new();
    let path = dir.write("config.toml", "[matcher\nharvest_policy = maybe");
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("config.toml"));
}

// =============================================================================
// MATCHER FROM CONFIG
// =============================================================================

#[test]
fn test_matcher_policies_follow_config() {
    let both = LicenseMatcher::from_config(&MatcherConfig::default());
    assert_eq!(both.policy_names(), vec!["definition", "harvest"]);

    let harvest_only = LicenseMatcher::from_config(&MatcherConfig {
        definition_policy: false,
        ..MatcherConfig::default()
    });
    assert_eq!(harvest_only.policy_names(), vec!["harvest"]);
}
