//! Package manager detection
//!
//! Picks the package manager a project uses from its lockfile, falling back
//! to the `packageManager` field of `package.json` and finally npm.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::manifest::PackageJson;
use crate::error::PackageManagerError;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    /// npm
    #[default]
    Npm,
    /// pnpm
    Pnpm,
    /// Yarn
    Yarn,
    /// Bun
    Bun,
}

/// Lockfiles checked in order, first match wins
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// Executable name
    pub fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Arguments that add `packages` as runtime dependencies
    pub fn install_args(self, packages: &[String]) -> Vec<String> {
        let verb = match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        };
        std::iter::once(verb.to_string())
            .chain(packages.iter().cloned())
            .collect()
    }

    /// Command line to show the user, e.g. `pnpm add clsx@^2.1.1`
    pub fn install_command_line(self, packages: &[String]) -> String {
        let mut line = self.command().to_string();
        for arg in self.install_args(packages) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    /// Detect the package manager of the project at `project`
    pub fn detect(project: &Path, package_json: Option<&PackageJson>) -> Self {
        if let Some((lockfile, pm)) = LOCKFILES
            .iter()
            .find(|(lockfile, _)| project.join(lockfile).exists())
        {
            tracing::debug!("Detected {pm} from {lockfile}");
            return *pm;
        }

        if let Some(pm) = package_json
            .and_then(|pkg| pkg.package_manager.as_deref())
            .and_then(|field| field.split('@').next())
            .and_then(|name| name.parse().ok())
        {
            tracing::debug!("Detected {pm} from packageManager field");
            return pm;
        }

        Self::default()
    }
}

impl FromStr for PackageManager {
    type Err = PackageManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            _ => Err(PackageManagerError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
