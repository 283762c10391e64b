//! Post-create commands run inside the new project
//!
//! Both steps block until the child exits. Callers decide whether a failure
//! is fatal; the scaffolding flow treats both as warnings.

use crate::config::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Run `git init` in `dir` with its output suppressed
pub async fn init_git(dir: &Path) -> Result<()> {
    let status = TokioCommand::new("git")
        .arg("init")
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .context("Failed to run git init")?;

    if !status.success() {
        anyhow::bail!(
            "git init failed with exit code: {}",
            status.code().unwrap_or(-1)
        );
    }

    tracing::info!(dir = %dir.display(), "git repository initialized");
    Ok(())
}

fn shell_command(cmd: &str) -> TokioCommand {
    if cfg!(windows) {
        let mut command = TokioCommand::new("cmd");
        command.arg("/C").arg(cmd);
        command
    } else {
        let mut command = TokioCommand::new("sh");
        command.arg("-c").arg(cmd);
        command
    }
}

/// Install dependencies with `pm` in `dir`, streaming its output
pub async fn install_dependencies(dir: &Path, pm: PackageManager) -> Result<()> {
    let cmd = pm.install_command();
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let mut child = shell_command(cmd)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to run {}", cmd))?;

    let stdout = child.stdout.take().context("Failed to capture stdout")?;
    let stderr = child.stderr.take().context("Failed to capture stderr")?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();
    let mut stdout_done = false;
    let mut stderr_done = false;

    while !(stdout_done && stderr_done) {
        tokio::select! {
            line = stdout_reader.next_line(), if !stdout_done => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => stdout_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_done = true;
                    }
                }
            }
            line = stderr_reader.next_line(), if !stderr_done => {
                match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => stderr_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_done = true;
                    }
                }
            }
        }
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for {}", cmd))?;
    println!();

    if !status.success() {
        anyhow::bail!(
            "{} failed with exit code: {}",
            cmd,
            status.code().unwrap_or(-1)
        );
    }

    tracing::info!(dir = %dir.display(), package_manager = %pm, "dependencies installed");
    Ok(())
}
