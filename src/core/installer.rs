//! Component installer
//!
//! Copies a single component's files into the project, rewriting registry
//! imports to the configured aliases on the way.

use std::path::{Path, PathBuf};

use crate::core::config::ProjectConfig;
use crate::core::registry::Registry;
use crate::core::resolver::{InstallExecutor, InstallOutcome};
use crate::core::transform::rewrite_imports;
use crate::error::InstallError;
use crate::infra::filesystem;

/// Options for installing components
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace components that already exist
    pub overwrite: bool,
    /// Report what would happen without writing anything
    pub dry_run: bool,
}

/// Filesystem-backed [`InstallExecutor`]
#[derive(Debug)]
pub struct ComponentInstaller<'a> {
    registry: &'a Registry,
    config: &'a ProjectConfig,
    project: &'a Path,
    options: InstallOptions,
    written: Vec<PathBuf>,
}

impl<'a> ComponentInstaller<'a> {
    /// Create an installer for the project at `project`
    pub fn new(
        registry: &'a Registry,
        config: &'a ProjectConfig,
        project: &'a Path,
        options: InstallOptions,
    ) -> Self {
        Self {
            registry,
            config,
            project,
            options,
            written: Vec::new(),
        }
    }

    /// Files written (or that would be written in a dry run), in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Consume the installer, returning the written files
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl InstallExecutor for ComponentInstaller<'_> {
    fn install(&mut self, name: &str) -> Result<InstallOutcome, InstallError> {
        let definition = self
            .registry
            .get(name)
            .ok_or_else(|| InstallError::SourceNotFound {
                name: name.to_string(),
            })?;

        let destinations: Vec<PathBuf> = definition
            .files
            .iter()
            .map(|file| self.config.component_path(self.project, file.path))
            .collect();

        if !self.options.overwrite && filesystem::any_exist(&destinations) {
            tracing::debug!("'{name}' already exists, leaving it untouched");
            return Ok(InstallOutcome::AlreadyExists);
        }

        for (file, dest) in definition.files.iter().zip(destinations) {
            let contents = rewrite_imports(file.contents, &self.config.aliases);
            if self.options.dry_run {
                tracing::info!("Would write {}", dest.display());
            } else {
                filesystem::write_file(&dest, &contents)?;
                tracing::debug!("Wrote {}", dest.display());
            }
            self.written.push(dest);
        }

        Ok(InstallOutcome::Copied)
    }
}
