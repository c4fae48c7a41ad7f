//! JSON revision document reading and writing

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::ComponentRevision;
use crate::error::{Error, Result};

/// A revision document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionFile {
    path: PathBuf,
}

impl RevisionFile {
    /// Refer to the document at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document
    pub fn load(&self) -> Result<ComponentRevision> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::io(&self.path, source))?;
        let revision: ComponentRevision =
            serde_json::from_str(&content).map_err(|source| Error::Document {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "loaded {} ({} file(s), {} harvest tool(s)) from {}",
            revision.definition.coordinates,
            revision.definition.files.len(),
            revision.harvest.len(),
            self.path.display()
        );
        Ok(revision)
    }

    /// Write `revision` as pretty JSON, creating parent directories
    pub fn save(&self, revision: &ComponentRevision) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
        }
        let content = serde_json::to_string_pretty(revision).map_err(|source| Error::Document {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|source| Error::io(&self.path, source))
    }
}
