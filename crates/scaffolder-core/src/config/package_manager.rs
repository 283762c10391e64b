//! Supported JavaScript package managers

use clap::ValueEnum;
use std::fmt;

/// Package manager used to install the generated project's dependencies
///
/// Variant order is the order shown in prompts; the first one is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    /// Name of the executable
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Shell command that installs dependencies
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Bun => "bun install",
        }
    }

    /// Shell command that starts the dev server
    pub fn dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Bun => "bun run dev",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(PackageManager::ALL[0], PackageManager::default());
    }

    #[test]
    fn test_install_commands_start_with_binary() {
        for pm in PackageManager::ALL {
            assert!(pm.install_command().starts_with(pm.binary()));
            assert!(pm.dev_command().starts_with(pm.binary()));
        }
    }

    #[test]
    fn test_value_enum_parses_lowercase_names() {
        assert_eq!(
            PackageManager::from_str("pnpm", false).ok(),
            Some(PackageManager::Pnpm)
        );
        assert!(PackageManager::from_str("cargo", false).is_err());
    }
}
