//! uikit - copy UI component sources into your project
//!
//! This library provides the logic behind the `uikit` CLI: resolving the
//! components a request needs, copying their sources with rewritten imports,
//! and checking `package.json` for the npm packages they use.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
