//! Project initialization logic
//!
//! Writes `uikit.json` and the `cn()` class helper every component imports.
//! `uikit init` runs this explicitly; `uikit add` runs it with defaults when
//! the project has no config yet.

use std::path::{Path, PathBuf};

use crate::config::defaults::PACKAGE_JSON;
use crate::core::config::ProjectConfig;
use crate::core::registry::UTILS_SOURCE;
use crate::error::{ConfigError, UikitError};
use crate::infra::filesystem;

/// Options for project initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing config and skip the package.json check
    pub force: bool,
    /// Component directory (defaults to `src/components/ui`)
    pub component_dir: Option<PathBuf>,
    /// Class helper location (defaults to `src/lib/utils.ts`)
    pub utils_path: Option<PathBuf>,
    /// Components import alias
    pub components_alias: Option<String>,
    /// Class helper import alias
    pub utils_alias: Option<String>,
}

/// Result of initialization
#[derive(Debug)]
pub struct InitResult {
    /// The config that was written
    pub config: ProjectConfig,
    /// Path to the written config
    pub config_path: PathBuf,
    /// Path to the class helper
    pub utils_path: PathBuf,
    /// Whether the class helper was written (false if it already existed)
    pub utils_written: bool,
}

/// Validate initialization can proceed
pub fn validate_init(path: &Path, options: &InitOptions) -> Result<(), ConfigError> {
    if !path.is_dir() {
        return Err(ConfigError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }

    if options.force {
        return Ok(());
    }

    let config_path = ProjectConfig::path_in(path);
    if config_path.exists() {
        return Err(ConfigError::AlreadyExists { path: config_path });
    }

    if !path.join(PACKAGE_JSON).exists() {
        return Err(ConfigError::NotAProject {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Build the config described by `options`
pub fn build_config(options: &InitOptions) -> ProjectConfig {
    let mut config = ProjectConfig::default();
    if let Some(dir) = &options.component_dir {
        config.component_dir.clone_from(dir);
    }
    if let Some(utils) = &options.utils_path {
        config.utils_path.clone_from(utils);
    }
    if let Some(alias) = &options.components_alias {
        config.aliases.components.clone_from(alias);
    }
    if let Some(alias) = &options.utils_alias {
        config.aliases.utils.clone_from(alias);
    }
    config
}

/// Write the config and the class helper
///
/// An existing class helper is only replaced when `overwrite_utils` is set.
pub fn write_project_files(
    path: &Path,
    config: ProjectConfig,
    overwrite_utils: bool,
) -> Result<InitResult, UikitError> {
    let config_path = config.save(path)?;

    let utils_path = path.join(&config.utils_path);
    let utils_written = overwrite_utils || !utils_path.exists();
    if utils_written {
        filesystem::write_file(&utils_path, UTILS_SOURCE)?;
    }

    Ok(InitResult {
        config,
        config_path,
        utils_path,
        utils_written,
    })
}

/// Write the class helper if it has gone missing from an initialized project
///
/// Returns the path when it had to be written.
pub fn restore_utils(path: &Path, config: &ProjectConfig) -> Result<Option<PathBuf>, UikitError> {
    let utils_path = path.join(&config.utils_path);
    if utils_path.exists() {
        return Ok(None);
    }
    tracing::info!("Restoring missing {}", utils_path.display());
    filesystem::write_file(&utils_path, UTILS_SOURCE)?;
    Ok(Some(utils_path))
}

/// Initialize the project at `path`
pub fn init_project(path: &Path, options: &InitOptions) -> Result<InitResult, UikitError> {
    validate_init(path, options)?;
    tracing::info!("Initializing uikit in {}", path.display());
    write_project_files(path, build_config(options), options.force)
}

/// Load the project config, creating a default one when missing
///
/// Returns the config and, when it had to be created, the init result.
pub fn ensure_initialized(path: &Path) -> Result<(ProjectConfig, Option<InitResult>), UikitError> {
    if ProjectConfig::path_in(path).exists() {
        return Ok((ProjectConfig::load(path)?, None));
    }

    if !path.is_dir() {
        return Err(ConfigError::DirectoryNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    tracing::info!("No uikit.json found, creating one with defaults");
    let result = write_project_files(path, ProjectConfig::default(), false)?;
    Ok((result.config.clone(), Some(result)))
}
