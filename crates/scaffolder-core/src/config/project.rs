//! Validated project name and the immutable generation config

use super::PackageManager;
use crate::error::ScaffoldError;
use std::fmt;

/// Project name restricted to `[a-z0-9-]+`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name
    pub fn parse(input: &str) -> Result<Self, ScaffoldError> {
        if Self::is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ScaffoldError::InvalidProjectName {
                name: input.to_string(),
            })
        }
    }

    /// Check a candidate name without allocating
    pub fn is_valid(input: &str) -> bool {
        !input.is_empty()
            && input
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, remainder untouched (`my-app` -> `My-app`)
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything decided before generation; read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: ProjectName,
    /// Template variant directory name
    pub template: String,
    pub package_manager: PackageManager,
    /// Run `git init` in the new project
    pub git: bool,
    /// Install dependencies after generation
    pub install: bool,
    /// Keep the demo component
    pub demo: bool,
}

impl ProjectConfig {
    /// Config used by `--yes` when no other flag is given
    pub fn defaults(name: ProjectName, template: impl Into<String>) -> Self {
        Self {
            name,
            template: template.into(),
            package_manager: PackageManager::default(),
            git: true,
            install: true,
            demo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["demo-app", "app", "my-app-2", "123", "-"] {
            assert!(ProjectName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "My-App", "my_app", "my app", "app!", "ünï", "../app"] {
            let err = ProjectName::parse(name).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
        }
    }

    #[test]
    fn test_capitalized_only_touches_first_char() {
        let name = ProjectName::parse("my-app").unwrap();
        assert_eq!(name.capitalized(), "My-app");

        let name = ProjectName::parse("1st-app").unwrap();
        assert_eq!(name.capitalized(), "1st-app");
    }

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::defaults(ProjectName::parse("demo-app").unwrap(), "react-ts");
        assert!(config.git);
        assert!(config.install);
        assert!(config.demo);
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert_eq!(config.template, "react-ts");
    }
}
