//! Error types for uikit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project configuration (`uikit.json`) errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Project directory not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Config file not found
    #[error("Config not found at '{path}'. Run 'uikit init' to create one.")]
    NotFound { path: PathBuf },

    /// Config already exists
    #[error("Config already exists at '{path}'. Use --force to overwrite it")]
    AlreadyExists { path: PathBuf },

    /// No package.json next to the config
    #[error("No package.json found in '{path}'. Use --force to initialize anyway")]
    NotAProject { path: PathBuf },

    /// Failed to parse config file
    #[error("Failed to parse config '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// IO error reading or writing the config
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Per-component installation failures
///
/// These never abort an `add` run; the resolver records them against the
/// component and keeps draining the queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// No source definition for the component
    #[error("Component '{name}' not found")]
    SourceNotFound { name: String },

    /// Copying or transforming a file failed
    #[error("Failed to write '{path}': {error}")]
    WriteFailure { path: PathBuf, error: String },
}

/// `package.json` errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// package.json not found
    #[error("package.json not found at '{path}'")]
    NotFound { path: PathBuf },

    /// package.json is not valid JSON
    #[error("Failed to parse '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Package manager errors
#[derive(Error, Debug)]
pub enum PackageManagerError {
    /// Unknown package manager name
    #[error("Unknown package manager '{name}' (expected npm, pnpm, yarn or bun)")]
    Unknown { name: String },

    /// Executable not found on PATH
    #[error("'{command}' was not found on PATH")]
    NotInstalled { command: String },

    /// Spawning the process failed
    #[error("Failed to run '{command}': {error}")]
    SpawnFailed { command: String, error: String },

    /// Process exited unsuccessfully
    #[error("'{command}' exited with status {status}")]
    CommandFailed { command: String, status: i32 },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

impl From<FilesystemError> for InstallError {
    fn from(err: FilesystemError) -> Self {
        match err {
            FilesystemError::CreateDir { path, error }
            | FilesystemError::WriteFile { path, error }
            | FilesystemError::ReadFile { path, error } => Self::WriteFailure { path, error },
        }
    }
}

/// Top-level uikit error type
#[derive(Error, Debug)]
pub enum UikitError {
    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Every requested name was blank
    #[error("No components to add. Run `uikit list` to see available components.")]
    NothingRequested,
}
