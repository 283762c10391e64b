//! Template lookup, copying and placeholder rewriting
//!
//! This module provides:
//! - Template manifest types (RootManifest, TemplateManifest)
//! - Template root resolution (flag, env var, install-relative, bundled)
//! - Template materialization into a fresh project directory
//! - Placeholder rewriting across the generated tree
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod rewriter;
pub mod version;

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use copier::{ensure_absent, materialize};
pub use manifest::{DemoFeature, RootManifest, TemplateManifest, MANIFEST_FILE};
pub use rewriter::{rewrite_tree, RewriteReport, RuleSet};
pub use version::check_compatibility;

/// A single template variant on disk
#[derive(Debug, Clone)]
pub struct Template {
    /// Directory name, as listed in the root manifest
    pub name: String,
    pub dir: PathBuf,
    pub manifest: TemplateManifest,
}

/// The set of templates found under one template root
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    root: PathBuf,
    manifest: RootManifest,
}

impl TemplateBundle {
    /// Find and open the template root for a product
    ///
    /// An explicit directory wins, then the product's env var, then the
    /// locations next to the executable, then the bundled directory.
    pub fn locate<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Result<Self> {
        let candidates = Self::candidates(config, template_dir);

        match candidates
            .iter()
            .find(|dir| dir.join(MANIFEST_FILE).is_file())
        {
            Some(root) => Self::open(root.clone()),
            None => Err(ScaffoldError::TemplateRootNotFound {
                searched: candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into()),
        }
    }

    /// Candidate template roots in lookup order
    pub fn candidates<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Vec<PathBuf> {
        if let Some(dir) = template_dir {
            return vec![dir.to_path_buf()];
        }

        if let Some(dir) = std::env::var_os(config.template_dir_env()) {
            return vec![PathBuf::from(dir)];
        }

        let mut candidates = Vec::new();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("templates"));
            candidates.push(
                exe_dir
                    .join("..")
                    .join("share")
                    .join(config.name())
                    .join("templates"),
            );
        }
        candidates.push(config.bundled_template_dir());
        candidates
    }

    /// Open a template root containing a `template.yaml`
    pub fn open(root: PathBuf) -> Result<Self> {
        let manifest_path = root.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let manifest: RootManifest =
            serde_yaml::from_str(&content).map_err(|e| ScaffoldError::InvalidManifest {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            root = %root.display(),
            templates = ?manifest.templates,
            "opened template root"
        );
        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Template names in manifest order
    pub fn names(&self) -> &[String] {
        &self.manifest.templates
    }

    /// Load one template by name
    pub fn template(&self, name: &str) -> Result<Template> {
        if !self.manifest.templates.iter().any(|t| t == name) {
            return Err(ScaffoldError::UnknownTemplate {
                name: name.to_string(),
                available: self.manifest.templates.join(", "),
            }
            .into());
        }

        let dir = self.root.join(name);
        let manifest_path = dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let manifest: TemplateManifest =
            serde_yaml::from_str(&content).map_err(|e| ScaffoldError::InvalidManifest {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Template {
            name: name.to_string(),
            dir,
            manifest,
        })
    }

    /// Load every template listed in the root manifest
    pub fn templates(&self) -> Result<Vec<Template>> {
        self.manifest
            .templates
            .iter()
            .map(|name| self.template(name))
            .collect()
    }
}
