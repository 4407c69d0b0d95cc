//! Component addition logic
//!
//! Ties the pieces of `uikit add` together: make sure the project is
//! initialized, resolve and copy the requested components with their
//! dependencies, then work out which npm packages the project still needs.

use std::path::{Path, PathBuf};

use crate::core::config::ProjectConfig;
use crate::core::init::{ensure_initialized, restore_utils, InitResult};
use crate::core::installer::{ComponentInstaller, InstallOptions};
use crate::core::manifest::PackageJson;
use crate::core::package_manager::PackageManager;
use crate::core::registry::{normalize_name, NpmDependency, Registry, UTILS_NPM_DEPENDENCIES};
use crate::core::resolver::{resolve_and_install, ProgressSink, Resolution};
use crate::error::{ManifestError, UikitError};

/// Options for adding components
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Replace components that already exist
    pub overwrite: bool,
    /// Report what would happen without writing anything
    pub dry_run: bool,
    /// Add every component in the registry
    pub all: bool,
    /// Package manager to use instead of detecting one
    pub package_manager: Option<PackageManager>,
}

/// Result of adding components
#[derive(Debug)]
pub struct AddResult {
    /// Normalized names that were requested
    pub requested: Vec<String>,
    /// Installed / failed partition
    pub resolution: Resolution,
    /// Set when `uikit.json` had to be created first
    pub initialized: Option<InitResult>,
    /// Set when the class helper was missing and had to be written again
    pub restored_utils: Option<PathBuf>,
    /// Files written (or that would be written in a dry run)
    pub written: Vec<PathBuf>,
    /// npm packages the installed components need but package.json lacks
    pub missing_dependencies: Vec<NpmDependency>,
    /// Package manager to install them with
    pub package_manager: PackageManager,
    /// Whether the project has a package.json
    pub has_package_json: bool,
}

/// Normalize requested names, dropping empties
pub fn normalize_requested<S: AsRef<str>>(requested: &[S]) -> Vec<String> {
    requested
        .iter()
        .map(|name| normalize_name(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// npm packages needed by the class helper and the `installed` components
pub fn required_npm_dependencies(registry: &Registry, installed: &[String]) -> Vec<NpmDependency> {
    let mut required: Vec<NpmDependency> = UTILS_NPM_DEPENDENCIES.to_vec();
    for name in installed {
        if let Some(definition) = registry.get(name) {
            required.extend_from_slice(definition.npm_dependencies);
        }
    }
    required
}

/// Add components to the project at `project`
///
/// Only project-level problems are errors (nothing requested, config cannot
/// be written, package.json is unreadable). Per-component failures end up in
/// [`AddResult::resolution`].
pub fn add_components<S: AsRef<str>>(
    project: &Path,
    requested: &[S],
    options: &AddOptions,
    sink: &mut dyn ProgressSink,
) -> Result<AddResult, UikitError> {
    let registry = Registry::builtin();
    let requested = if options.all {
        registry.names().into_iter().map(String::from).collect()
    } else {
        normalize_requested(requested)
    };
    if requested.is_empty() {
        return Err(UikitError::NothingRequested);
    }

    let package_json = match PackageJson::load(project) {
        Ok(pkg) => Some(pkg),
        Err(ManifestError::NotFound { .. }) => None,
        Err(e) => return Err(e.into()),
    };

    let (config, initialized) = if options.dry_run && !ProjectConfig::path_in(project).exists() {
        (ProjectConfig::default(), None)
    } else {
        ensure_initialized(project)?
    };

    let restored_utils = if options.dry_run || initialized.is_some() {
        None
    } else {
        restore_utils(project, &config)?
    };

    tracing::info!("Adding {}", requested.join(", "));

    let dependencies = registry.dependency_map();
    let mut installer = ComponentInstaller::new(
        &registry,
        &config,
        project,
        InstallOptions {
            overwrite: options.overwrite,
            dry_run: options.dry_run,
        },
    );
    let resolution =
        resolve_and_install(requested.iter().cloned(), &dependencies, &mut installer, sink);
    let written = installer.into_written();

    let required = required_npm_dependencies(&registry, &resolution.installed);
    let missing_dependencies = package_json
        .clone()
        .unwrap_or_default()
        .missing_dependencies(&required);

    let package_manager = options
        .package_manager
        .unwrap_or_else(|| PackageManager::detect(project, package_json.as_ref()));

    Ok(AddResult {
        requested,
        resolution,
        initialized,
        restored_utils,
        written,
        missing_dependencies,
        package_manager,
        has_package_json: package_json.is_some(),
    })
}
