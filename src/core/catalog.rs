use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::core::error::VcmError;
use crate::core::project::{Project, VcsKind};

/// Persisted fields of one cataloged project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub project_name: String,
    pub path: PathBuf,
    pub vc_system: VcsKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub use_github: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
}

impl CatalogEntry {
    fn from_project(project: &Project) -> Self {
        Self {
            project_name: project.name.clone(),
            path: project.path.clone(),
            vc_system: project.vcs,
            user: project.user.clone(),
            use_github: project.use_github,
            server_address: project.server_address.clone(),
        }
    }

    pub fn to_project(&self) -> Project {
        Project {
            name: self.project_name.clone(),
            path: self.path.clone(),
            vcs: self.vc_system,
            user: self.user.clone(),
            server_address: self.server_address.clone(),
            use_github: self.use_github,
        }
    }
}

/// Result of recording a project in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    AlreadyPresent,
}

/// Registry of known projects, serialized as one TOML table keyed by
/// identifier.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Load the catalog from disk, or return an empty one if the file does
    /// not exist. A malformed catalog is a fatal error, never auto-repaired.
    pub fn load(config: &Config) -> Result<Self, VcmError> {
        let path = config.catalog_path();
        if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| VcmError::CatalogRead(Box::new(e)))?;
            toml::from_str(&content).map_err(|e| VcmError::CatalogRead(Box::new(e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Rewrite the whole catalog file.
    pub fn save(&self, config: &Config) -> Result<(), VcmError> {
        let path = config.catalog_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| VcmError::CatalogWrite(Box::new(e)))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| VcmError::CatalogWrite(Box::new(e)))?;
        std::fs::write(&path, content).map_err(|e| VcmError::CatalogWrite(Box::new(e)))?;
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.get(identifier)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Record a project under its identifier. Existing entries are never
    /// overwritten; a duplicate identifier reports [`RecordOutcome::AlreadyPresent`]
    /// and leaves the catalog untouched.
    pub fn record(&mut self, project: &Project) -> RecordOutcome {
        let identifier = project.identifier();
        if self.entries.contains_key(&identifier) {
            return RecordOutcome::AlreadyPresent;
        }
        self.entries
            .insert(identifier, CatalogEntry::from_project(project));
        RecordOutcome::Inserted
    }
}
