use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::error::VcmError;
use crate::core::project::Project;

/// Move a project's dot-folder into central storage and leave a symbolic
/// link at the original location. Returns the path inside storage.
///
/// The steps run in order with no rollback: a failure after the rename
/// leaves the dot-folder moved but unlinked.
pub fn move_dot_folder(project: &Project, config: &Config) -> Result<PathBuf, VcmError> {
    let dot_folder = project.path.join(project.vcs.dot_folder());

    // Re-running after a successful move is rejected here.
    if dot_folder.is_symlink() {
        return Err(VcmError::AlreadyLinked(dot_folder));
    }

    if !config.storage_dir.exists() {
        fs::create_dir(&config.storage_dir)?;
    }

    // A same-named project was relocated before; never clobber it. A
    // dangling symlink at the destination counts as occupied.
    let destination = config.storage_dir.join(&project.name);
    if destination.symlink_metadata().is_ok() {
        return Err(VcmError::DestinationExists(destination));
    }

    fs::rename(&dot_folder, &destination)?;

    // The rename reported success, so the source must be gone.
    if dot_folder.symlink_metadata().is_ok() {
        return Err(VcmError::MoveIncomplete(dot_folder));
    }

    symlink_dir(&destination, &dot_folder)?;
    Ok(destination)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
