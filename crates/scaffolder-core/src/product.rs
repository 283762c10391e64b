//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product binary implements to configure
//! the scaffolding behavior for its bundled template set.

use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};

/// Placeholder tokens embedded in a product's templates
///
/// Every token is matched as a whole word. The three forms are disjoint so a
/// single pass over a file can replace all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    /// Lowercase token, replaced with the raw project name
    pub lower: &'static str,
    /// PascalCase token, replaced with the capitalized project name
    pub pascal: &'static str,
    /// Hyphenated phrase, replaced with the raw project name
    pub phrase: &'static str,
    /// Suffix that protects `lower` from replacement (an asset filename such as `logo.svg`)
    pub protected_suffix: Option<&'static str>,
}

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Where its bundled templates live
/// - The placeholder tokens its templates carry
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template root shipped with the binary, computed once at startup
    fn bundled_template_dir(&self) -> PathBuf;

    /// Template variant used when none is selected
    fn default_template(&self) -> &'static str;

    /// Placeholder tokens to replace with the project name
    fn placeholders(&self) -> Placeholders;

    /// Description written into the generated package manifest
    fn describe(&self, project_name: &str) -> String;

    /// Generate the "next steps" instructions after project creation
    ///
    /// `installed` is true only when the install step ran and succeeded.
    fn next_steps(&self, dir: &Path, config: &ProjectConfig, installed: bool) -> Vec<String>;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
