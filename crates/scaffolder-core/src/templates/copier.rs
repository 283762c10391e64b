//! Template materialization: copy, demo removal, manifest stamping

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::templates::manifest::{DemoFeature, MANIFEST_FILE};
use crate::templates::Template;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Entry point body written when the demo component is left out
pub const FALLBACK_ENTRY: &str = r#"export default function App() {
  return (
    <div className="flex min-h-screen items-center justify-center bg-slate-900">
      <h1 className="text-3xl font-bold text-white">Hello, Electron + React!</h1>
    </div>
  );
}
"#;

/// Fail if the destination already exists
pub fn ensure_absent(dest: &Path) -> Result<(), ScaffoldError> {
    if dest.exists() {
        return Err(ScaffoldError::DirectoryExists {
            path: dest.to_path_buf(),
        });
    }
    Ok(())
}

/// Copy a template into `dest` and adapt it to the project config
///
/// Returns the copied paths, relative to `dest`. Files written before a
/// failure are left on disk.
pub async fn materialize<C: ProductConfig>(
    product: &C,
    template: &Template,
    config: &ProjectConfig,
    dest: &Path,
) -> Result<Vec<PathBuf>> {
    ensure_absent(dest)?;

    let mut copied = copy_tree(&template.dir, dest).await?;

    if !config.demo {
        if let Some(demo) = &template.manifest.demo {
            strip_demo(dest, demo).await?;
            let demo_dir = Path::new(&demo.dir);
            copied.retain(|p| !p.starts_with(demo_dir));
        }
    }

    let name = config.name.as_str();
    stamp_package_manifest(
        &dest.join(&template.manifest.package_manifest),
        name,
        &product.describe(name),
    )
    .await?;

    tracing::info!(files = copied.len(), dest = %dest.display(), "template materialized");
    Ok(copied)
}

/// Recursively copy `src` into a new `dest`, skipping the template manifest
async fn copy_tree(src: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir(dest)
        .await
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let mut copied = Vec::new();

    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read template: {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Template entry outside template root")?;

        if entry.depth() == 1 && entry.file_name() == MANIFEST_FILE {
            continue;
        }

        let target_path = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
            continue;
        }

        fs::copy(entry.path(), &target_path)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        tracing::trace!(file = %relative.display(), "copied");
        copied.push(relative.to_path_buf());
    }

    Ok(copied)
}

/// Delete the demo directory and replace the entry point with the fallback
async fn strip_demo(dest: &Path, demo: &DemoFeature) -> Result<()> {
    let demo_dir = dest.join(&demo.dir);
    match fs::remove_dir_all(&demo_dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %demo_dir.display(), "demo directory not present");
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to remove directory: {}", demo_dir.display()))
        }
    }

    let entry = dest.join(&demo.entry);
    fs::write(&entry, FALLBACK_ENTRY)
        .await
        .with_context(|| format!("Failed to write file: {}", entry.display()))?;

    tracing::debug!(entry = %entry.display(), "demo removed");
    Ok(())
}

/// Set `name` and `description` in a JSON package manifest
///
/// Key order is kept and output uses two-space indentation.
async fn stamp_package_manifest(path: &Path, name: &str, description: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| ScaffoldError::InvalidManifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::InvalidManifest {
            path: path.to_path_buf(),
            reason: "expected a JSON object".to_string(),
        })?;
    fields.insert("name".to_string(), name.into());
    fields.insert("description".to_string(), description.into());

    let mut serialized = serde_json::to_string_pretty(&manifest)?;
    serialized.push('\n');
    fs::write(path, serialized)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectName;
    use crate::product::Placeholders;
    use crate::templates::test_support::write_template_root;
    use crate::templates::TemplateBundle;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn template_dir_env(&self) -> &'static str {
            "SCAFFOLDER_TEST_TEMPLATE_DIR"
        }
        fn bundled_template_dir(&self) -> PathBuf {
            PathBuf::from("templates")
        }
        fn default_template(&self) -> &'static str {
            "basic"
        }
        fn placeholders(&self) -> Placeholders {
            Placeholders {
                lower: "electrovite",
                pascal: "ElectroVite",
                phrase: "electro-vite-template",
                protected_suffix: Some(".svg"),
            }
        }
        fn describe(&self, project_name: &str) -> String {
            format!("{project_name} desktop app")
        }
        fn next_steps(
            &self,
            _dir: &Path,
            _config: &ProjectConfig,
            _installed: bool,
        ) -> Vec<String> {
            Vec::new()
        }
        fn upgrade_command(&self) -> &'static str {
            "cargo install test --force"
        }
    }

    fn setup() -> (tempfile::TempDir, Template) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("templates");
        std::fs::create_dir(&root).unwrap();
        write_template_root(&root);
        let template = TemplateBundle::open(root).unwrap().template("basic").unwrap();
        (tmp, template)
    }

    fn config(demo: bool) -> ProjectConfig {
        ProjectConfig {
            demo,
            ..ProjectConfig::defaults(ProjectName::parse("my-app").unwrap(), "basic")
        }
    }

    #[tokio::test]
    async fn test_copies_tree_and_stamps_manifest() {
        let (tmp, template) = setup();
        let dest = tmp.path().join("my-app");

        let copied = materialize(&TestProduct, &template, &config(true), &dest)
            .await
            .unwrap();

        assert!(copied.contains(&PathBuf::from("src/components/Demo/Demo.tsx")));
        assert!(!dest.join(MANIFEST_FILE).exists());
        assert_eq!(
            std::fs::read(dest.join("src/assets/electrovite.svg")).unwrap(),
            std::fs::read(template.dir.join("src/assets/electrovite.svg")).unwrap()
        );

        let manifest = std::fs::read_to_string(dest.join("package.json")).unwrap();
        assert_eq!(
            manifest,
            "{\n  \"name\": \"my-app\",\n  \"version\": \"0.0.1\",\n  \
             \"description\": \"my-app desktop app\",\n  \"productName\": \"ElectroVite\"\n}\n"
        );
    }

    #[tokio::test]
    async fn test_demo_excluded() {
        let (tmp, template) = setup();
        let dest = tmp.path().join("my-app");

        let copied = materialize(&TestProduct, &template, &config(false), &dest)
            .await
            .unwrap();

        assert!(!dest.join("src/components/Demo").exists());
        assert!(copied.iter().all(|p| !p.starts_with("src/components/Demo")));
        assert_eq!(
            std::fs::read_to_string(dest.join("src/App.tsx")).unwrap(),
            FALLBACK_ENTRY
        );
    }

    #[tokio::test]
    async fn test_existing_destination_is_untouched() {
        let (tmp, template) = setup();
        let dest = tmp.path().join("my-app");
        std::fs::create_dir(&dest).unwrap();
        std::fs::write(dest.join("keep.txt"), "mine").unwrap();

        let err = materialize(&TestProduct, &template, &config(true), &dest)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DirectoryExists { .. })
        ));
        let entries: Vec<_> = std::fs::read_dir(&dest).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(dest.join("keep.txt")).unwrap(), "mine");
    }

    #[tokio::test]
    async fn test_non_object_manifest_is_rejected() {
        let (tmp, template) = setup();
        std::fs::write(template.dir.join("package.json"), "[1, 2]").unwrap();
        let dest = tmp.path().join("my-app");

        let err = materialize(&TestProduct, &template, &config(true), &dest)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidManifest { .. })
        ));
    }
}
