//! Core business logic module
//!
//! Everything `uikit` decides lives here; spawning processes belongs in
//! [`crate::infra`].
//!
//! # Submodules
//!
//! - [`resolver`] - Component dependency resolution and install queue
//! - [`registry`] - Built-in component definitions
//! - [`installer`] - Copies one component into the project
//! - [`transform`] - Import path rewriting
//! - [`config`] - Project config (uikit.json)
//! - [`init`] - Project initialization logic
//! - [`add`] - Component addition logic
//! - [`manifest`] - package.json dependency checks
//! - [`package_manager`] - Package manager detection

pub mod add;
pub mod config;
pub mod init;
pub mod installer;
pub mod manifest;
pub mod package_manager;
pub mod registry;
pub mod resolver;
pub mod transform;
