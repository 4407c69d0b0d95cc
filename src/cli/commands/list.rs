//! CLI implementation for `uikit list` command

use anyhow::Result;
use serde_json::json;

use crate::cli::output::{print_json, OutputConfig};
use crate::core::registry::Registry;

/// Execute the list command
pub fn execute() -> Result<()> {
    let registry = Registry::builtin();
    let output = OutputConfig::global();

    if output.json {
        let components: Vec<_> = registry
            .components()
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "description": c.description,
                    "dependencies": c.dependencies,
                    "npmDependencies": c.npm_dependencies.iter().map(|d| d.name).collect::<Vec<_>>(),
                })
            })
            .collect();
        return print_json(&components);
    }

    if output.quiet {
        return Ok(());
    }

    let width = registry
        .components()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    println!("Available components:");
    for component in registry.components() {
        let requires = if component.dependencies.is_empty() {
            String::new()
        } else {
            format!(" (requires {})", component.dependencies.join(", "))
        };
        println!(
            "  {:<width$}  {}{requires}",
            component.name, component.description
        );
    }

    Ok(())
}
