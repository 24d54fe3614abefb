use std::path::PathBuf;

use clap::Parser;

use crate::core::error::VcmError;
use crate::core::project::ProjectSpec;

/// Record a version-controlled project in the catalog and optionally move
/// its dot-folder into central storage.
#[derive(Parser)]
#[command(name = "vcm", about = "Version-control metadata mover", version)]
pub struct Cli {
    /// Move the dot-folder into central storage after recording
    #[arg(long = "move")]
    pub move_dot_folder: bool,

    /// Derive GitHub remote URLs from the user name and project name
    #[arg(long = "git-hub")]
    pub git_hub: bool,

    /// Project name (default: base name of the project path)
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Version control system (git or svn)
    #[arg(long, value_name = "KIND", default_value = "git")]
    pub version_control: String,

    /// Project root directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Remote server address
    #[arg(long, value_name = "ADDR")]
    pub server_address: Option<String>,

    /// Remote account or user name
    #[arg(long, value_name = "NAME")]
    pub user_name: Option<String>,

    /// Skip derivation and look the project up in the catalog
    #[arg(
        long,
        value_name = "ID",
        conflicts_with_all = ["git_hub", "project", "version_control", "path", "server_address", "user_name"]
    )]
    pub identifier: Option<String>,
}

impl Cli {
    /// Translate the flag surface into a project spec.
    pub fn to_spec(&self) -> Result<ProjectSpec, VcmError> {
        if let Some(identifier) = &self.identifier {
            return Ok(ProjectSpec::Lookup {
                identifier: identifier.clone(),
            });
        }
        let path = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        Ok(ProjectSpec::Explicit {
            path,
            vcs: self.version_control.parse()?,
            name: self.project.clone(),
            user: self.user_name.clone(),
            server_address: self.server_address.clone(),
            use_github: self.git_hub,
        })
    }
}
