//! External process execution
//!
//! Runs the project's package manager. One attempt only; the caller decides
//! how to report a failure.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::core::package_manager::PackageManager;
use crate::error::PackageManagerError;

/// Where a child process's stdout goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildOutput {
    /// Share our stdout
    #[default]
    Inherit,
    /// Send it to our stderr, keeping stdout for machine-readable output
    Stderr,
    /// Discard it
    Silent,
}

impl ChildOutput {
    fn stdout(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Stderr => std::io::stderr().into(),
            Self::Silent => Stdio::null(),
        }
    }
}

/// Run `program args…` in `dir`
///
/// stderr is always inherited; stdout follows `output`.
pub async fn run_command(
    program: &str,
    args: &[String],
    dir: &Path,
    output: ChildOutput,
) -> Result<(), PackageManagerError> {
    let executable = which::which(program).map_err(|_| PackageManagerError::NotInstalled {
        command: program.to_string(),
    })?;

    tracing::info!("Running {} {}", program, args.join(" "));

    let status = Command::new(executable)
        .args(args)
        .current_dir(dir)
        .stdout(output.stdout())
        .status()
        .await
        .map_err(|e| PackageManagerError::SpawnFailed {
            command: program.to_string(),
            error: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PackageManagerError::CommandFailed {
            command: program.to_string(),
            status: status.code().unwrap_or(-1),
        })
    }
}

/// Install `packages` into the project at `dir` with `pm`
pub async fn install_packages(
    pm: PackageManager,
    packages: &[String],
    dir: &Path,
    output: ChildOutput,
) -> Result<(), PackageManagerError> {
    if packages.is_empty() {
        return Ok(());
    }
    run_command(pm.command(), &pm.install_args(packages), dir, output).await
}
