//! License matcher service - decides whether two revisions share a license
//!
//! This module contains pure decision logic with no I/O dependencies.
//! Evidence comes from the configured [`MatchPolicy`] implementations.

use super::definition_policy::DefinitionLicenseMatchPolicy;
use super::harvest_policy::HarvestLicenseMatchPolicy;
use crate::config::MatcherConfig;
use crate::core::models::{ComponentRevision, MatchResults, ProcessResult};
use crate::core::ports::MatchPolicy;

/// Runs every policy over two revisions and reduces the evidence to a verdict
pub struct LicenseMatcher {
    policies: Vec<Box<dyn MatchPolicy>>,
}

impl LicenseMatcher {
    /// Create a matcher running `policies` in order
    #[must_use]
    pub fn new(policies: Vec<Box<dyn MatchPolicy>>) -> Self {
        Self { policies }
    }

    /// Build the policy list from configuration
    ///
    /// With both policies disabled the matcher has no evidence source and
    /// every verdict is inconclusive.
    #[must_use]
    pub fn from_config(config: &MatcherConfig) -> Self {
        let mut policies: Vec<Box<dyn MatchPolicy>> = Vec::new();
        if config.definition_policy {
            policies.push(Box::new(DefinitionLicenseMatchPolicy::new()));
        }
        if config.harvest_policy {
            policies.push(Box::new(HarvestLicenseMatchPolicy::new(
                config.harvest.tool.clone(),
                config.harvest.mutable_license_url_hosts.clone(),
            )));
        }
        Self::new(policies)
    }

    /// Names of the configured policies, in evaluation order
    #[must_use]
    pub fn policy_names(&self) -> Vec<&str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Compare `source` against `target` with every policy
    #[must_use]
    pub fn compare(&self, source: &ComponentRevision, target: &ComponentRevision) -> MatchResults {
        let mut results = MatchResults::new();
        for policy in &self.policies {
            let evidence = policy.compare(source, target);
            log::debug!(
                "policy {}: {} match, {} mismatch",
                policy.name(),
                evidence.matches.len(),
                evidence.mismatches.len()
            );
            results.extend(evidence);
        }
        results
    }

    /// Decide whether `source` and `target` carry equivalent licensing
    #[must_use]
    pub fn process(&self, source: &ComponentRevision, target: &ComponentRevision) -> ProcessResult {
        let verdict = decide(self.compare(source, target));
        log::info!(
            "{} vs {}: {}",
            source.definition.coordinates,
            target.definition.coordinates,
            match &verdict {
                ProcessResult::Matching(_) => "matching",
                ProcessResult::NotMatching(items) if items.is_empty() => "inconclusive",
                ProcessResult::NotMatching(_) => "not matching",
            }
        );
        verdict
    }
}

impl Default for LicenseMatcher {
    fn default() -> Self {
        Self::new(vec![
            Box::new(DefinitionLicenseMatchPolicy::new()),
            Box::new(HarvestLicenseMatchPolicy::default()),
        ])
    }
}

impl std::fmt::Debug for LicenseMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseMatcher").field("policies", &self.policy_names()).finish()
    }
}

/// Reduce concatenated evidence to a verdict
///
/// Any mismatch vetoes a match. No evidence at all is not a match either:
/// the verdict is `NotMatching` with an empty list.
#[must_use]
pub fn decide(results: MatchResults) -> ProcessResult {
    if results.mismatches.is_empty() && !results.matches.is_empty() {
        ProcessResult::Matching(results.matches)
    } else {
        ProcessResult::NotMatching(results.mismatches)
    }
}
