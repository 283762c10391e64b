//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library provides the core functionality for generating projects from a
//! bundled template tree. A binary supplies its product identity through the
//! [`ProductConfig`] trait and either drives the steps itself or hands control
//! to the interactive driver in [`tui`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template lookup, tree copy, placeholder rewriting,
//!   tool detection and post-create commands
//! - **Layer 2: Configuration** - `ProductConfig` trait and the immutable `ProjectConfig`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::templates::{self, RuleSet, TemplateBundle};
//! use scaffolder_core::{ProductConfig, ProjectConfig, ProjectName};
//!
//! let bundle = TemplateBundle::locate(&MyConfig, None)?;
//! let template = bundle.template("react-ts")?;
//! let config = ProjectConfig::defaults(ProjectName::parse("my-app")?, "react-ts");
//! let dest = std::env::current_dir()?.join(config.name.as_str());
//!
//! templates::materialize(&MyConfig, &template, &config, &dest).await?;
//! let rules = RuleSet::new(&MyConfig.placeholders(), &config.name)?;
//! templates::rewrite_tree(&dest, &rules).await?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{PackageManager, ProjectConfig, ProjectName};
pub use error::ScaffoldError;
pub use product::{Placeholders, ProductConfig};
pub use runtime::{check_git, check_package_manager, ToolInfo};
pub use templates::{RootManifest, Template, TemplateBundle, TemplateManifest};

#[cfg(feature = "tui")]
pub use tui::run;
