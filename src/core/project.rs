use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;
use crate::core::error::VcmError;

/// Supported version control systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Git,
    Svn,
}

impl VcsKind {
    /// Name of the metadata folder this VC system keeps in a working tree.
    pub fn dot_folder(self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Svn => ".svn",
        }
    }
}

impl FromStr for VcsKind {
    type Err = VcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(VcsKind::Git),
            "svn" => Ok(VcsKind::Svn),
            other => Err(VcmError::UnknownVcs(other.to_string())),
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsKind::Git => write!(f, "git"),
            VcsKind::Svn => write!(f, "svn"),
        }
    }
}

/// One version-controlled project and its remote metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub vcs: VcsKind,
    pub user: Option<String>,
    pub server_address: Option<String>,
    pub use_github: bool,
}

/// Remote URLs derived for a GitHub-hosted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRemotes {
    pub https: String,
    pub git: String,
}

/// How the CLI asks for a project: either a full description from flags, or
/// an identifier to look up in the catalog.
#[derive(Debug, Clone)]
pub enum ProjectSpec {
    Explicit {
        path: PathBuf,
        vcs: VcsKind,
        name: Option<String>,
        user: Option<String>,
        server_address: Option<String>,
        use_github: bool,
    },
    Lookup {
        identifier: String,
    },
}

impl Project {
    /// Build a project from a spec, consulting the catalog for lookups.
    pub fn resolve(spec: ProjectSpec, catalog: &Catalog) -> Result<Self, VcmError> {
        match spec {
            ProjectSpec::Explicit {
                path,
                vcs,
                name,
                user,
                server_address,
                use_github,
            } => {
                let name = name.unwrap_or_else(|| {
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                });
                Ok(Self {
                    name,
                    path,
                    vcs,
                    user,
                    server_address,
                    use_github,
                })
            }
            ProjectSpec::Lookup { identifier } => catalog
                .get(&identifier)
                .map(|entry| entry.to_project())
                .ok_or(VcmError::IdentifierNotFound(identifier)),
        }
    }

    /// Catalog key, derived from the project name and VC kind.
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.name, self.vcs)
    }

    /// Remote URLs for GitHub-hosted git projects. Pure string templates,
    /// nothing is fetched or validated.
    pub fn github_remotes(&self) -> Option<GithubRemotes> {
        if !self.use_github || self.vcs != VcsKind::Git {
            return None;
        }
        let user = self.user.as_deref()?;
        Some(GithubRemotes {
            https: format!("https://github.com/{}/{}", user, self.name),
            git: format!("git@github.com:{}/{}.git", user, self.name),
        })
    }
}
