//! Charm-style CLI prompts using cliclack

use crate::config::{PackageManager, ProjectConfig, ProjectName};
use crate::product::ProductConfig;
use crate::runtime::{check, post_create};
use crate::templates::{copier, rewriter, version, Template, TemplateBundle};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Template name to use
    pub template: Option<String>,

    /// Package manager used for the install step
    pub package_manager: Option<PackageManager>,

    /// Skip `git init`
    pub no_git: bool,

    /// Skip dependency installation
    pub no_install: bool,

    /// Leave the demo component out
    pub no_demo: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(product.display_name())?;

    // Step 1: Locate templates
    let bundle = TemplateBundle::locate(product, args.template_dir.as_deref())?;
    if args.template_dir.is_some() {
        cliclack::log::info(format!(
            "Using local templates from {}",
            bundle.root().display()
        ))?;
    }

    // Step 2: Project name and destination
    let name = select_name(&args)?;
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let project_dir = current_dir.join(name.as_str());
    copier::ensure_absent(&project_dir)?;

    // Step 3: Select template
    let template = select_template(product, &bundle, &args)?;
    if let Some(warning) = version::check_compatibility(
        cli_version,
        &template.manifest.version,
        product.upgrade_command(),
    ) {
        cliclack::log::warning(warning)?;
    }

    // Step 4: Remaining options
    let config = collect_options(name, &template, &args)?;
    tracing::debug!(?config, dest = %project_dir.display(), "project config resolved");

    // Step 5: Copy template (fatal on failure)
    create_project(product, &template, &config, &project_dir).await?;

    // Step 6: Replace placeholders (best effort)
    rewrite_placeholders(product, &config, &project_dir).await?;

    // Step 7: Post-create commands (best effort)
    let installed = run_post_create(&config, &project_dir).await?;

    // Step 8: Show next steps
    print_next_steps(product, &project_dir, &config, installed)?;

    Ok(())
}

fn select_name(args: &CreateArgs) -> Result<ProjectName> {
    if let Some(name) = &args.name {
        let name = ProjectName::parse(name)?;
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name);
    }

    let input: String = cliclack::input("Project name")
        .placeholder("my-app")
        .validate(|input: &String| {
            if ProjectName::is_valid(input) {
                Ok(())
            } else {
                Err("Use lowercase letters, digits and hyphens only")
            }
        })
        .interact()?;

    Ok(ProjectName::parse(&input)?)
}

fn select_template<C: ProductConfig>(
    product: &C,
    bundle: &TemplateBundle,
    args: &CreateArgs,
) -> Result<Template> {
    // If a template was specified via --template flag, use it directly
    if let Some(name) = &args.template {
        let template = bundle.template(name)?;
        cliclack::log::info(format!(
            "Template: {} - {}",
            template.manifest.name, template.manifest.description
        ))?;
        return Ok(template);
    }

    let mut templates = bundle.templates()?;
    if templates.is_empty() {
        anyhow::bail!("No templates found in {}", bundle.root().display());
    }

    let default_idx = templates
        .iter()
        .position(|t| t.name == product.default_template())
        .unwrap_or(0);

    if args.yes || templates.len() == 1 {
        let template = templates.swap_remove(default_idx);
        cliclack::log::info(format!(
            "Using template: {} - {}",
            template.manifest.name, template.manifest.description
        ))?;
        return Ok(template);
    }

    // Build select prompt - use indices to avoid borrow issues
    let mut select = cliclack::select("Select a template");
    for (idx, template) in templates.iter().enumerate() {
        select = select.item(idx, &template.manifest.name, &template.manifest.description);
    }

    let selected_idx: usize = select.initial_value(default_idx).interact()?;
    Ok(templates.swap_remove(selected_idx))
}

fn collect_options(
    name: ProjectName,
    template: &Template,
    args: &CreateArgs,
) -> Result<ProjectConfig> {
    let defaults = ProjectConfig::defaults(name, template.name.clone());

    let demo = if args.no_demo || template.manifest.demo.is_none() {
        false
    } else if args.yes {
        defaults.demo
    } else {
        cliclack::confirm("Include the demo component?")
            .initial_value(true)
            .interact()?
    };

    let package_manager = match args.package_manager {
        Some(pm) => pm,
        None if args.yes => defaults.package_manager,
        None => select_package_manager()?,
    };

    let git = if args.no_git {
        false
    } else if args.yes {
        defaults.git
    } else {
        cliclack::confirm("Initialize a git repository?")
            .initial_value(true)
            .interact()?
    };

    let install = if args.no_install {
        false
    } else if args.yes {
        defaults.install
    } else {
        cliclack::confirm(format!("Install dependencies with {}?", package_manager))
            .initial_value(true)
            .interact()?
    };

    Ok(ProjectConfig {
        demo,
        package_manager,
        git,
        install,
        ..defaults
    })
}

fn select_package_manager() -> Result<PackageManager> {
    let mut select = cliclack::select("Select a package manager");
    for pm in PackageManager::ALL {
        select = select.item(pm, pm.binary(), check::check_package_manager(pm).hint());
    }

    Ok(select.initial_value(PackageManager::default()).interact()?)
}

async fn create_project<C: ProductConfig>(
    product: &C,
    template: &Template,
    config: &ProjectConfig,
    project_dir: &Path,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match copier::materialize(product, template, config, project_dir).await {
        Ok(copied) => {
            spinner.stop(format!(
                "Created {} files in {}",
                copied.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e)
        }
    }
}

/// Message shown after the placeholder pass
#[derive(Debug, PartialEq, Eq)]
enum RewriteNotice {
    Success(String),
    Warning(String),
}

fn rewrite_notice(result: &Result<rewriter::RewriteReport>) -> RewriteNotice {
    match result {
        Ok(report) => {
            RewriteNotice::Success(format!("Named project files ({} updated)", report.rewritten))
        }
        Err(e) => {
            RewriteNotice::Warning(format!("Could not update project name in files: {:#}", e))
        }
    }
}

async fn rewrite_placeholders<C: ProductConfig>(
    product: &C,
    config: &ProjectConfig,
    project_dir: &Path,
) -> Result<()> {
    let result = match rewriter::RuleSet::new(&product.placeholders(), &config.name) {
        Ok(rules) => rewriter::rewrite_tree(project_dir, &rules).await,
        Err(e) => Err(e),
    };

    match rewrite_notice(&result) {
        RewriteNotice::Success(message) => cliclack::log::success(message)?,
        RewriteNotice::Warning(message) => {
            tracing::warn!(error = %message, "placeholder rewrite failed");
            cliclack::log::warning(message)?;
        }
    }

    Ok(())
}

/// Run git init and the install step, returning whether dependencies were installed
async fn run_post_create(config: &ProjectConfig, project_dir: &Path) -> Result<bool> {
    if config.git {
        let spinner = cliclack::spinner();
        spinner.start("Initializing git repository...");
        match post_create::init_git(project_dir).await {
            Ok(()) => spinner.stop("Initialized git repository"),
            Err(e) => {
                spinner.stop("Git initialization skipped");
                let hint = if check::check_git().available {
                    String::new()
                } else {
                    " (git is not installed)".to_string()
                };
                cliclack::log::warning(format!("{:#}{}", e, hint))?;
            }
        }
    }

    if !config.install {
        return Ok(false);
    }

    let pm = config.package_manager;
    cliclack::log::info(format!("Installing dependencies with {}", pm))?;
    match post_create::install_dependencies(project_dir, pm).await {
        Ok(()) => {
            cliclack::log::success("Dependencies installed")?;
            Ok(true)
        }
        Err(e) => {
            cliclack::log::warning(format!(
                "{:#}. Run `{}` inside the project to retry",
                e,
                pm.install_command()
            ))?;
            Ok(false)
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    config: &ProjectConfig,
    installed: bool,
) -> Result<()> {
    let steps = product.next_steps(project_dir, config, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Created {}. Happy coding!", config.name))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Placeholders;

    fn rules() -> rewriter::RuleSet {
        let placeholders = Placeholders {
            lower: "electrovite",
            pascal: "ElectroVite",
            phrase: "electro-vite-template",
            protected_suffix: None,
        };
        rewriter::RuleSet::new(&placeholders, &ProjectName::parse("demo-app").unwrap()).unwrap()
    }

    #[test]
    fn test_rewrite_report_becomes_success() {
        let report = rewriter::RewriteReport {
            scanned: 4,
            rewritten: 3,
            skipped: 1,
        };
        assert_eq!(
            rewrite_notice(&Ok(report)),
            RewriteNotice::Success("Named project files (3 updated)".to_string())
        );
    }

    #[tokio::test]
    async fn test_rewrite_failure_becomes_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("gone");

        let result = rewriter::rewrite_tree(&missing, &rules()).await;
        assert!(result.is_err());

        let RewriteNotice::Warning(message) = rewrite_notice(&result) else {
            panic!("expected a warning");
        };
        assert!(message.starts_with("Could not update project name in files: "));
        assert!(message.contains("gone"));
    }
}
