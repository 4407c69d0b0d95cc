//! CLI implementation for `uikit add` command
//!
//! This module handles the CLI interface for adding components to a project:
//! progress lines while the queue drains, a summary, then installing any npm
//! packages the new components import.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde_json::json;

use crate::cli::output::{
    create_spinner, print_detail, print_failure, print_info, print_json, print_success,
    print_warning, OutputConfig,
};
use crate::config::defaults::LIST_HINT;
use crate::core::add::{add_components, AddOptions, AddResult};
use crate::core::manifest::install_spec;
use crate::core::package_manager::PackageManager;
use crate::core::resolver::{InstallEvent, ProgressSink};
use crate::infra::process::{install_packages, ChildOutput};

/// Arguments of `uikit add`
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Requested component names
    pub components: Vec<String>,
    /// Add every component
    pub all: bool,
    /// Replace existing components
    pub overwrite: bool,
    /// Write nothing
    pub dry_run: bool,
    /// Do not run the package manager
    pub skip_install: bool,
    /// Package manager override
    pub package_manager: Option<String>,
}

/// Renders resolver events as a spinner plus one line per component
struct SpinnerSink {
    spinner: Option<ProgressBar>,
}

impl SpinnerSink {
    fn new() -> Self {
        Self { spinner: None }
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ProgressSink for SpinnerSink {
    fn on_event(&mut self, event: InstallEvent<'_>) {
        match event {
            InstallEvent::Starting { name } => {
                self.finish();
                self.spinner = Some(create_spinner(&format!("Adding {name}...")));
            }
            InstallEvent::Succeeded { name } => {
                self.finish();
                print_success(&format!("Added {name}"));
            }
            InstallEvent::WarnedExists { name } => {
                self.finish();
                print_warning(&format!(
                    "{name} already exists, skipping (use --overwrite to replace it)"
                ));
            }
            InstallEvent::Failed { name, error } => {
                self.finish();
                print_failure(&format!("Failed to add {name}: {error}"));
            }
        }
    }
}

/// Execute the add command
pub async fn execute(path: &Path, args: AddArgs) -> Result<()> {
    let package_manager = args
        .package_manager
        .as_deref()
        .map(str::parse::<PackageManager>)
        .transpose()?;

    let options = AddOptions {
        overwrite: args.overwrite,
        dry_run: args.dry_run,
        all: args.all,
        package_manager,
    };

    let mut sink = SpinnerSink::new();
    let result = add_components(path, args.components.as_slice(), &options, &mut sink)
        .context("Failed to add components");
    sink.finish();
    let result = result?;

    let output = OutputConfig::global();
    if output.json {
        print_json(&json!({
            "installed": result.resolution.installed,
            "failed": result.resolution.failed,
            "written": result.written,
            "restoredUtils": result.restored_utils,
            "missingDependencies": result
                .missing_dependencies
                .iter()
                .map(install_spec)
                .collect::<Vec<_>>(),
            "dryRun": args.dry_run,
        }))?;
    } else {
        report(&result);
    }

    if !args.dry_run && !args.skip_install {
        install_missing(path, &result).await;
    }

    if result.resolution.has_failures() {
        anyhow::bail!(
            "{} of {} component(s) failed to install",
            result.resolution.failed.len(),
            result.resolution.installed.len() + result.resolution.failed.len()
        );
    }

    Ok(())
}

/// Print the summary of an add run
fn report(result: &AddResult) {
    if let Some(init) = &result.initialized {
        print_info(&format!(
            "Created {} with default settings",
            init.config_path.display()
        ));
    }

    if let Some(utils) = &result.restored_utils {
        print_warning(&format!("{} was missing and has been restored", utils.display()));
    }

    let resolution = &result.resolution;
    if !resolution.installed.is_empty() {
        print_success(&format!(
            "{} component(s) ready: {}",
            resolution.installed.len(),
            resolution.installed.join(", ")
        ));
    }

    if resolution.has_failures() {
        let names: Vec<&str> = resolution.failed.iter().map(|f| f.name.as_str()).collect();
        print_failure(&format!(
            "{} component(s) failed: {}",
            names.len(),
            names.join(", ")
        ));
        print_failure(LIST_HINT);
    }

    if !result.missing_dependencies.is_empty() {
        print_info("Missing npm packages:");
        for dep in &result.missing_dependencies {
            print_detail(&format!("+ {}", install_spec(dep)));
        }
    }
}

/// Where the package manager's stdout goes, so `--json` keeps stdout clean
fn child_output(output: OutputConfig) -> ChildOutput {
    if output.json {
        ChildOutput::Stderr
    } else if output.quiet {
        ChildOutput::Silent
    } else {
        ChildOutput::Inherit
    }
}

/// Install missing npm packages, reporting but not propagating failure
async fn install_missing(path: &Path, result: &AddResult) {
    if result.missing_dependencies.is_empty() {
        return;
    }

    let packages: Vec<String> = result.missing_dependencies.iter().map(install_spec).collect();
    let pm = result.package_manager;

    if !result.has_package_json {
        print_warning(&format!(
            "No package.json found. Install dependencies manually: {}",
            pm.install_command_line(&packages)
        ));
        return;
    }

    let spinner = create_spinner(&format!("Installing dependencies with {pm}..."));
    let stdout_mode = child_output(OutputConfig::global());
    let outcome = install_packages(pm, &packages, path, stdout_mode).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(()) => print_success(&format!("Installed {} package(s) with {pm}", packages.len())),
        Err(e) => {
            tracing::debug!("Dependency installation failed: {e}");
            print_warning(&format!(
                "Could not install dependencies ({e}). Run manually: {}",
                pm.install_command_line(&packages)
            ));
        }
    }
}
