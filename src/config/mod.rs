//! Configuration constants
//!
//! File names, default paths and aliases used when no `uikit.json` exists yet.

pub mod defaults;
