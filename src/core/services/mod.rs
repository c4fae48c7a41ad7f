//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Reduce policy evidence to a verdict
//! - [`definition_policy`] - Compare license file identity
//! - [`harvest_policy`] / [`strategy`] - Compare declared licenses per ecosystem
//! - [`license_files`] - Decide which paths are license files
//! - [`harvest`] - Latest tool output and property paths

pub mod definition_policy;
pub mod harvest;
pub mod harvest_policy;
pub mod license_files;
pub mod matcher;
pub mod strategy;

pub use definition_policy::{DEFINITION_POLICY, DefinitionLicenseMatchPolicy, LicenseFilePair, pair_license_files};
pub use harvest::{CLEARLYDEFINED_TOOL, latest_tool_harvest, latest_version, value_at};
pub use harvest_policy::{DEFAULT_MUTABLE_LICENSE_URL_HOSTS, HarvestLicenseMatchPolicy};
pub use license_files::{is_license_file, license_file_key, license_locations};
pub use matcher::{LicenseMatcher, decide};
pub use strategy::{
    Ecosystem, HARVEST_POLICY, HarvestStrategy, NUGET_LICENSE_URL, discard_mutable_license_url_matches,
};
