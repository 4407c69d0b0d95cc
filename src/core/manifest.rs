//! `package.json` handling
//!
//! Only the fields uikit cares about are read: the dependency tables and the
//! `packageManager` hint. The file is never rewritten here; installing
//! packages is left to the project's package manager.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use semver::{Op, Version, VersionReq};
use serde::Deserialize;

use crate::config::defaults::PACKAGE_JSON;
use crate::core::registry::NpmDependency;
use crate::error::ManifestError;

/// The parts of `package.json` uikit reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,

    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,

    /// Corepack `packageManager` field, e.g. `pnpm@9.1.0`
    #[serde(default)]
    pub package_manager: Option<String>,
}

impl PackageJson {
    /// Parse from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load `package.json` from the project root
    pub fn load(project: &Path) -> Result<Self, ManifestError> {
        let path = project.join(PACKAGE_JSON);
        if !path.exists() {
            return Err(ManifestError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| ManifestError::ParseError {
            path,
            error: e.to_string(),
        })
    }

    /// Declared range for `name` in either dependency table
    pub fn declared(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .map(String::as_str)
    }

    /// Required packages that are absent or declared below the required minimum
    ///
    /// Duplicates in `required` are reported once. Declared ranges that are
    /// not plain semver (`workspace:*`, `latest`, git URLs) count as satisfied.
    pub fn missing_dependencies(&self, required: &[NpmDependency]) -> Vec<NpmDependency> {
        let mut seen = BTreeSet::new();
        required
            .iter()
            .filter(|dep| seen.insert(dep.name))
            .filter(|dep| match self.declared(dep.name) {
                None => true,
                Some(declared) => !satisfies(declared, dep.version),
            })
            .copied()
            .collect()
    }
}

/// Lowest version admitted by an npm-style range, if it has a lower bound
pub fn minimum_version(range: &str) -> Option<Version> {
    let req = VersionReq::parse(range.trim().trim_start_matches('v')).ok()?;
    let comparator = req.comparators.first()?;
    match comparator.op {
        Op::Exact | Op::Greater | Op::GreaterEq | Op::Tilde | Op::Caret | Op::Wildcard => {
            let mut version = Version::new(
                comparator.major,
                comparator.minor.unwrap_or(0),
                comparator.patch.unwrap_or(0),
            );
            version.pre = comparator.pre.clone();
            Some(version)
        }
        _ => None,
    }
}

/// Whether a declared range meets the minimum of a required range
fn satisfies(declared: &str, required: &str) -> bool {
    match (minimum_version(declared), minimum_version(required)) {
        (Some(have), Some(want)) => have >= want,
        _ => true,
    }
}

/// `name@range` argument for a package manager
pub fn install_spec(dep: &NpmDependency) -> String {
    format!("{}@{}", dep.name, dep.version)
}
