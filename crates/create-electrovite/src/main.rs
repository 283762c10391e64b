//! create-electrovite - Project scaffolding for Electron + React + Tailwind apps

mod logging;

use anyhow::Result;
use clap::Parser;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{PackageManager, Placeholders, ProductConfig, ProjectConfig};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ElectroVite product configuration
#[derive(Clone)]
pub struct ElectroViteConfig;

impl ProductConfig for ElectroViteConfig {
    fn name(&self) -> &'static str {
        "create-electrovite"
    }

    fn display_name(&self) -> &'static str {
        "ElectroVite"
    }

    fn template_dir_env(&self) -> &'static str {
        "ELECTROVITE_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    fn default_template(&self) -> &'static str {
        "react-ts"
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
        format!(
            "{} - a desktop application built with Electron, React and Tailwind CSS",
            project_name
        )
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-electrovite --force"
    }

    fn next_steps(&self, dir: &Path, config: &ProjectConfig, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();
        let pm = config.package_manager;

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        // Step 2: Install dependencies if skipped or failed
        if !installed {
            steps.push(pm.install_command().to_string());
        }

        // Step 3: Start dev server
        steps.push(pm.dev_command().to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-electrovite")]
#[command(about = "CLI for scaffolding Electron + React + Tailwind desktop apps")]
#[command(version)]
pub struct Args {
    /// Project name (lowercase letters, digits and hyphens)
    pub name: Option<String>,

    /// Skip prompts and use defaults for every unspecified option
    #[arg(short, long)]
    pub yes: bool,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Leave the demo component out of the project
    #[arg(long = "no-demo")]
    pub no_demo: bool,

    /// Template name to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors in diagnostic output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template_dir: args.template_dir,
            template: args.template,
            package_manager: args.package_manager,
            no_git: args.no_git,
            no_install: args.no_install,
            no_demo: args.no_demo,
            yes: args.yes,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet)?;
    tracing::debug!(version = CLI_VERSION, "starting");

    let result = scaffolder_core::run(&ElectroViteConfig, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scaffolder_core::ProjectName;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_create_args() {
        let args = Args::parse_from([
            "create-electrovite",
            "demo-app",
            "--yes",
            "--no-install",
            "-p",
            "pnpm",
            "-t",
            "react-js",
        ]);
        let create: CreateArgs = args.into();

        assert_eq!(create.name.as_deref(), Some("demo-app"));
        assert!(create.yes);
        assert!(create.no_install);
        assert!(!create.no_git);
        assert_eq!(create.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(create.template.as_deref(), Some("react-js"));
    }

    #[test]
    fn test_bundled_templates_exist() {
        let dir = ElectroViteConfig.bundled_template_dir();
        assert!(dir.join("template.yaml").is_file());
        assert!(dir.join(ElectroViteConfig.default_template()).is_dir());
    }

    #[test]
    fn test_next_steps_include_install_when_skipped() {
        let cwd = std::env::current_dir().unwrap();
        let dir = cwd.join("demo-app");
        let config = ProjectConfig {
            install: false,
            package_manager: PackageManager::Yarn,
            ..ProjectConfig::defaults(ProjectName::parse("demo-app").unwrap(), "react-ts")
        };

        let steps = ElectroViteConfig.next_steps(&dir, &config, false);
        assert_eq!(steps, vec!["cd demo-app", "yarn install", "yarn dev"]);
    }

    #[test]
    fn test_next_steps_include_install_when_failed() {
        let cwd = std::env::current_dir().unwrap();
        let config = ProjectConfig::defaults(ProjectName::parse("demo-app").unwrap(), "react-ts");
        assert!(config.install);

        let steps = ElectroViteConfig.next_steps(&cwd.join("demo-app"), &config, false);
        assert_eq!(steps, vec!["cd demo-app", "npm install", "npm run dev"]);
    }

    #[test]
    fn test_next_steps_omit_install_after_success() {
        let cwd = std::env::current_dir().unwrap();
        let config = ProjectConfig {
            package_manager: PackageManager::Pnpm,
            ..ProjectConfig::defaults(ProjectName::parse("demo-app").unwrap(), "react-ts")
        };

        let steps = ElectroViteConfig.next_steps(&cwd, &config, true);
        assert_eq!(steps, vec!["pnpm dev"]);
    }
}
