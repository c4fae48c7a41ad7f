//! Per-ecosystem harvest comparison strategies
//!
//! Each ecosystem keeps its declared license in different fields of the
//! harvest tool output. A [`HarvestStrategy`] names those fields; comparing
//! two revisions reads each field from both sides.

use std::fmt;

use serde_json::Value;
use url::Url;

use super::harvest::{latest_tool_harvest, value_at};
use crate::core::models::{ComponentRevision, MatchResults, is_empty_value};

/// Policy name recorded on harvest evidence
pub const HARVEST_POLICY: &str = "harvest";

/// NuGet field holding a (possibly mutable) license URL
pub const NUGET_LICENSE_URL: &str = "manifest.licenseUrl";

/// Package ecosystems with known declared-license fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// Rust crates
    Crate,
    /// PHP composer packages
    Composer,
    /// Debian binary packages
    Deb,
    /// Debian source packages
    Debsrc,
    /// Ruby gems
    Gem,
    /// Maven artifacts
    Maven,
    /// npm packages
    Npm,
    /// NuGet packages
    Nuget,
    /// CocoaPods
    Pod,
    /// Python packages
    Pypi,
    /// Anything else: no comparable fields
    Other,
}

impl Ecosystem {
    /// Ecosystem for a coordinates `type`
    #[must_use]
    pub fn from_type(component_type: &str) -> Self {
        match component_type {
            "crate" => Self::Crate,
            "composer" => Self::Composer,
            "deb" => Self::Deb,
            "debsrc" => Self::Debsrc,
            "gem" => Self::Gem,
            "maven" => Self::Maven,
            "npm" => Self::Npm,
            "nuget" => Self::Nuget,
            "pod" => Self::Pod,
            "pypi" => Self::Pypi,
            _ => Self::Other,
        }
    }

    /// Comparison points: each point lists alternative paths, tried in order
    #[must_use]
    pub const fn comparison_points(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Maven => &[&["manifest.summary.licenses"]],
            Self::Crate | Self::Pod => &[&["registryData.license"]],
            Self::Npm | Self::Composer => &[&["registryData.manifest.license"]],
            Self::Gem => &[&["registryData.licenses"]],
            Self::Pypi => &[&["declaredLicense", "registryData.info.license"]],
            Self::Deb | Self::Debsrc => &[&["declaredLicenses"]],
            Self::Nuget => &[&["manifest.licenseExpression"], &[NUGET_LICENSE_URL]],
            Self::Other => &[],
        }
    }
}

/// Harvest comparison for one ecosystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestStrategy {
    ecosystem: Ecosystem,
    component_type: String,
}

impl HarvestStrategy {
    /// Strategy for a coordinates `type`; unknown types compare nothing
    #[must_use]
    pub fn for_type(component_type: &str) -> Self {
        Self {
            ecosystem: Ecosystem::from_type(component_type),
            component_type: component_type.to_string(),
        }
    }

    /// Always `"harvest"`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        HARVEST_POLICY
    }

    /// The coordinates type this strategy was chosen for
    #[must_use]
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Ecosystem the strategy dispatches on
    #[must_use]
    pub const fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Every property path the strategy may read
    #[must_use]
    pub fn prop_paths(&self) -> Vec<&'static str> {
        self.ecosystem.comparison_points().iter().flat_map(|p| p.iter().copied()).collect()
    }

    /// Compare the latest `tool` output of both revisions
    ///
    /// For each comparison point the first path with a value on either side
    /// is compared. NuGet results then go through
    /// [`discard_mutable_license_url_matches`].
    #[must_use]
    pub fn compare(
        &self,
        source: &ComponentRevision,
        target: &ComponentRevision,
        tool: &str,
        mutable_hosts: &[String],
    ) -> MatchResults {
        let source_latest = latest_tool_harvest(&source.harvest, tool);
        let target_latest = latest_tool_harvest(&target.harvest, tool);

        let mut results = MatchResults::new();
        for point in self.ecosystem.comparison_points() {
            let resolved = point.iter().find_map(|path| {
                let s = read_path(source_latest, path);
                let t = read_path(target_latest, path);
                (!is_empty_value(s) || !is_empty_value(t)).then_some((*path, s, t))
            });
            if let Some((path, s, t)) = resolved {
                results.compare(self.name(), None, path, s, t);
            }
        }

        if self.ecosystem == Ecosystem::Nuget {
            discard_mutable_license_url_matches(&mut results, mutable_hosts);
        }
        results
    }
}

impl fmt::Display for HarvestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} [{}]", self.name(), self.component_type, self.prop_paths().join(", "))
    }
}

fn read_path<'a>(doc: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    doc.and_then(|d| value_at(d, path))
}

/// Drop `licenseUrl` matches whose URL is hosted somewhere mutable
///
/// The content behind a GitHub URL changes without the URL changing, and the
/// deprecated-license-URL placeholder says nothing about the license, so
/// agreeing on either proves nothing. Such matches are removed, not turned
/// into mismatches.
pub fn discard_mutable_license_url_matches(results: &mut MatchResults, mutable_hosts: &[String]) {
    results.matches.retain(|item| {
        let mutable = item.prop_path == NUGET_LICENSE_URL
            && item.value.as_str().is_some_and(|url| is_mutable_url(url, mutable_hosts));
        if mutable {
            log::debug!("ignoring licenseUrl match on mutable URL {}", item.value);
        }
        !mutable
    });
}

fn is_mutable_url(url: &str, mutable_hosts: &[String]) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_lowercase();
    mutable_hosts.iter().any(|mutable| {
        let mutable = mutable.to_lowercase();
        host == mutable || host.ends_with(&format!(".{mutable}"))
    })
}
