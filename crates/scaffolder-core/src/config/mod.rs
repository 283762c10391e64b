//! Project configuration decided before generation starts

pub mod package_manager;
pub mod project;

pub use package_manager::PackageManager;
pub use project::{ProjectConfig, ProjectName};
