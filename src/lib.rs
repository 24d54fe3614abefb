//! `vcm` — a version-control metadata mover for the command line.
//!
//! Relocates a project's VC dot-folder (`.git`, `.svn`) into a central
//! storage directory under the user's home, leaves a symbolic link in its
//! place, and keeps a catalog of known projects and their remote metadata.

pub mod cli;
pub mod core;
