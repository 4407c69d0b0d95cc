//! CLI implementation for `uikit init` command
//!
//! This module handles the CLI interface for project initialization.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::output::{print_detail, print_json, print_success, OutputConfig};
use crate::core::init::{init_project, InitOptions};

/// Execute the init command
pub fn execute(path: &Path, options: &InitOptions) -> Result<()> {
    let result = init_project(path, options).context("Failed to initialize project")?;

    if OutputConfig::global().json {
        return print_json(&json!({
            "config": result.config_path,
            "utils": result.utils_path,
            "utilsWritten": result.utils_written,
        }));
    }

    print_success(&format!("Initialized uikit in {}", path.display()));
    print_detail("Created uikit.json");
    if result.utils_written {
        print_detail(&format!("Created {}", result.config.utils_path.display()));
    } else {
        print_detail(&format!(
            "Kept existing {}",
            result.config.utils_path.display()
        ));
    }
    print_detail(&format!(
        "Components go to {}",
        result.config.component_dir.display()
    ));

    Ok(())
}
