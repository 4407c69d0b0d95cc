//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod add;
pub mod init;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults::PACKAGE_MANAGER_ENV;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create uikit.json and the class helper in the current project
    Init {
        /// Overwrite an existing config and skip the package.json check
        #[arg(short, long)]
        force: bool,

        /// Directory components are copied into
        #[arg(long, value_name = "DIR")]
        component_dir: Option<PathBuf>,

        /// Location of the class helper file
        #[arg(long, value_name = "PATH")]
        utils_path: Option<PathBuf>,

        /// Import alias for components
        #[arg(long, value_name = "ALIAS")]
        components_alias: Option<String>,

        /// Import alias for the class helper
        #[arg(long, value_name = "ALIAS")]
        utils_alias: Option<String>,
    },

    /// Add components and their dependencies to the project
    Add {
        /// Component names (e.g. Accordion, toggle-group)
        #[arg(required_unless_present = "all")]
        components: Vec<String>,

        /// Add every available component
        #[arg(short, long, conflicts_with = "components")]
        all: bool,

        /// Replace components that already exist
        #[arg(short, long)]
        overwrite: bool,

        /// Show what would be written without touching the project
        #[arg(long)]
        dry_run: bool,

        /// Do not install missing npm packages
        #[arg(long)]
        skip_install: bool,

        /// Package manager to use (npm, pnpm, yarn, bun)
        #[arg(long, env = PACKAGE_MANAGER_ENV, value_name = "PM")]
        package_manager: Option<String>,
    },

    /// List available components
    List,
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Init {
                force,
                component_dir,
                utils_path,
                components_alias,
                utils_alias,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = crate::core::init::InitOptions {
                    force,
                    component_dir,
                    utils_path,
                    components_alias,
                    utils_alias,
                };
                init::execute(&current_dir, &options)
            }
            Self::Add {
                components,
                all,
                overwrite,
                dry_run,
                skip_install,
                package_manager,
            } => {
                let current_dir = std::env::current_dir()?;
                let args = add::AddArgs {
                    components,
                    all,
                    overwrite,
                    dry_run,
                    skip_install,
                    package_manager,
                };
                add::execute(&current_dir, args).await
            }
            Self::List => list::execute(),
        }
    }
}
