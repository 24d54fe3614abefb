//! Core library for `vcm`.
//!
//! Provides the project record, catalog persistence, configuration, and the
//! dot-folder relocation operation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod project;
pub mod relocate;
