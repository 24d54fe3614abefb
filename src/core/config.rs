use std::path::PathBuf;

use crate::core::error::VcmError;

/// Filesystem locations `vcm` operates on.
///
/// Passed explicitly into the catalog and relocation code so tests can point
/// everything at a temporary directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Central storage directory holding relocated dot-folders and the
    /// catalog file.
    pub storage_dir: PathBuf,
}

impl Config {
    /// The conventional storage location, `~/.VersionControl`.
    pub fn from_home() -> Result<Self, VcmError> {
        let home = dirs::home_dir().ok_or(VcmError::NoHomeDir)?;
        Ok(Self {
            storage_dir: home.join(".VersionControl"),
        })
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.storage_dir.join("projects.toml")
    }
}
