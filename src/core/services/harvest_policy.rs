//! Harvest match policy
//!
//! Compares the declared license that each ecosystem's registry reports,
//! as captured by the latest run of a harvest tool.

use super::harvest::CLEARLYDEFINED_TOOL;
use super::strategy::{HARVEST_POLICY, HarvestStrategy};
use crate::core::models::{ComponentRevision, MatchResults};
use crate::core::ports::MatchPolicy;

/// Hosts whose license URLs do not pin the license text
pub const DEFAULT_MUTABLE_LICENSE_URL_HOSTS: [&str; 3] =
    ["github.com", "raw.githubusercontent.com", "aka.ms"];

/// Compares ecosystem-specific declared-license fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestLicenseMatchPolicy {
    tool: String,
    mutable_license_url_hosts: Vec<String>,
}

impl HarvestLicenseMatchPolicy {
    /// Create a policy reading `tool` output and ignoring license URL
    /// matches on `mutable_license_url_hosts`
    #[must_use]
    pub fn new(tool: impl Into<String>, mutable_license_url_hosts: Vec<String>) -> Self {
        Self {
            tool: tool.into(),
            mutable_license_url_hosts,
        }
    }

    /// Strategy chosen for a revision, based on its ecosystem type
    #[must_use]
    pub fn strategy_for(&self, revision: &ComponentRevision) -> HarvestStrategy {
        HarvestStrategy::for_type(revision.component_type())
    }
}

impl Default for HarvestLicenseMatchPolicy {
    fn default() -> Self {
        Self::new(
            CLEARLYDEFINED_TOOL,
            DEFAULT_MUTABLE_LICENSE_URL_HOSTS.iter().map(ToString::to_string).collect(),
        )
    }
}

impl MatchPolicy for HarvestLicenseMatchPolicy {
    fn name(&self) -> &str {
        HARVEST_POLICY
    }

    fn compare(&self, source: &ComponentRevision, target: &ComponentRevision) -> MatchResults {
        let strategy = self.strategy_for(source);
        log::debug!("{HARVEST_POLICY}: using {strategy}");
        strategy.compare(source, target, &self.tool, &self.mutable_license_url_hosts)
    }
}
