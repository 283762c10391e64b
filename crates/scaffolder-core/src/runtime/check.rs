//! Detection of git and package manager executables

use crate::config::PackageManager;
use std::process::{Command, Stdio};

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub version: Option<String>,
    pub available: bool,
}

impl ToolInfo {
    /// Short label for prompt hints, e.g. `10.2.4` or `not installed`
    pub fn hint(&self) -> String {
        match (&self.version, self.available) {
            (Some(version), true) => version.clone(),
            (None, true) => "installed".to_string(),
            _ => "not installed".to_string(),
        }
    }
}

/// Check whether `binary --version` runs successfully
pub fn check_tool(binary: &str) -> ToolInfo {
    let output = Command::new(binary)
        .arg("--version")
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                version: (!version.is_empty()).then_some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            version: None,
            available: false,
        },
    }
}

/// Check if git is available
pub fn check_git() -> ToolInfo {
    check_tool("git")
}

/// Check if a package manager is available
pub fn check_package_manager(pm: PackageManager) -> ToolInfo {
    check_tool(pm.binary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_unavailable() {
        let info = check_tool("definitely-not-a-real-tool-4f2a");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.hint(), "not installed");
    }

    #[test]
    fn test_hint_prefers_version() {
        let info = ToolInfo {
            version: Some("10.2.4".to_string()),
            available: true,
        };
        assert_eq!(info.hint(), "10.2.4");
    }
}
