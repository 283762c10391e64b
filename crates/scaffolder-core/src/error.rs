//! Typed failures that abort project generation

use std::path::PathBuf;
use thiserror::Error;

/// Fatal precondition and template errors
///
/// These sit at the root of an `anyhow` chain so callers can still
/// `downcast_ref` to tell a bad name from a broken template.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory {} already exists", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Invalid project name '{name}': use lowercase letters, digits and hyphens only")]
    InvalidProjectName { name: String },

    #[error("Template directory not found (searched: {searched})")]
    TemplateRootNotFound { searched: String },

    #[error("Template '{name}' not found. Available templates: {available}")]
    UnknownTemplate { name: String, available: String },

    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },
}
