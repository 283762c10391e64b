//! Template manifest types and parsing

use serde::Deserialize;

/// File name of both the root and the per-template manifest
pub const MANIFEST_FILE: &str = "template.yaml";

/// Root template manifest (templates/template.yaml)
/// Lists available template directories
#[derive(Debug, Clone, Deserialize)]
pub struct RootManifest {
    /// List of template directory names
    pub templates: Vec<String>,
}

/// Optional demo component shipped with a template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoFeature {
    /// Directory holding the demo, relative to the template root
    pub dir: String,

    /// Entry point that imports the demo and gets a fallback body without it
    pub entry: String,
}

/// Per-template manifest (templates/<name>/template.yaml)
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Package manifest to stamp with the project name
    #[serde(default = "default_package_manifest")]
    pub package_manifest: String,

    /// Demo component that can be left out
    #[serde(default)]
    pub demo: Option<DemoFeature>,
}

fn default_package_manifest() -> String {
    "package.json".to_string()
}
