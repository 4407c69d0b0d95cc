//! Infrastructure layer
//!
//! Handles all I/O that is not project-config bookkeeping: writing component
//! files and spawning the package manager.

pub mod filesystem;
pub mod process;
