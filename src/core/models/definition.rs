//! Component revision inputs
//!
//! The matcher compares two [`ComponentRevision`]s, each carrying the
//! curated definition and the raw harvest bag for one revision of a
//! component. These are read-only inputs supplied by the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw tool output: tool name -> tool version -> output document
pub type HarvestBag = BTreeMap<String, BTreeMap<String, Value>>;

/// Identifies one revision of a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCoordinates {
    /// Package ecosystem (`npm`, `maven`, `nuget`, ...)
    #[serde(rename = "type")]
    pub component_type: String,
    /// Where the component was fetched from (`npmjs`, `mavencentral`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Ecosystem namespace, e.g. npm scope or maven group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Component name
    pub name: String,
    /// Revision (version, commit, ...)
    pub revision: String,
}

impl EntityCoordinates {
    /// Create coordinates with no provider or namespace
    #[must_use]
    pub fn new(
        component_type: impl Into<String>,
        name: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            component_type: component_type.into(),
            provider: None,
            namespace: None,
            name: name.into(),
            revision: revision.into(),
        }
    }
}

impl fmt::Display for EntityCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.component_type,
            self.provider.as_deref().unwrap_or("-"),
            self.namespace.as_deref().unwrap_or("-"),
            self.name,
            self.revision
        )
    }
}

/// Content hashes of a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashes {
    /// SHA-1 digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// SHA-256 digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// A file entry of a definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionFile {
    /// Path inside the component archive
    pub path: String,
    /// License detected in the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Content hashes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Hashes>,
    /// Token identifying normalized license text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl DefinitionFile {
    /// Read one of the identity properties (`hashes.sha1`, `hashes.sha256`, `token`)
    ///
    /// Empty strings read as absent.
    #[must_use]
    pub fn identity(&self, prop_path: &str) -> Option<&str> {
        let value = match prop_path {
            "hashes.sha1" => self.hashes.as_ref().and_then(|h| h.sha1.as_deref()),
            "hashes.sha256" => self.hashes.as_ref().and_then(|h| h.sha256.as_deref()),
            "token" => self.token.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Curated view of a component revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Which component revision this describes
    pub coordinates: EntityCoordinates,
    /// Files found in the component
    #[serde(default)]
    pub files: Vec<DefinitionFile>,
}

/// Unit of comparison for the license matcher
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRevision {
    /// Curated definition
    pub definition: Definition,
    /// Raw harvest data
    #[serde(default)]
    pub harvest: HarvestBag,
}

impl ComponentRevision {
    /// Create a revision from its parts
    #[must_use]
    pub const fn new(definition: Definition, harvest: HarvestBag) -> Self {
        Self {
            definition,
            harvest,
        }
    }

    /// Ecosystem type of this revision
    #[must_use]
    pub fn component_type(&self) -> &str {
        &self.definition.coordinates.component_type
    }
}
