//! Tool detection and post-create commands
//!
//! This module provides:
//! - Detection of git and the supported package managers
//! - The post-create steps (`git init`, dependency install)

pub mod check;
pub mod post_create;

pub use check::{check_git, check_package_manager, check_tool, ToolInfo};
pub use post_create::{init_git, install_dependencies};
