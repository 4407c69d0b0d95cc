//! Project configuration (`uikit.json`)
//!
//! Tells uikit where components go and how they import each other:
//!
//! ```json
//! {
//!   "componentDir": "src/components/ui",
//!   "utilsPath": "src/lib/utils.ts",
//!   "aliases": { "components": "~/components/ui", "utils": "~/lib/utils" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    CONFIG_FILE, DEFAULT_COMPONENTS_ALIAS, DEFAULT_COMPONENT_DIR, DEFAULT_UTILS_ALIAS,
    DEFAULT_UTILS_PATH,
};
use crate::error::ConfigError;

/// Import aliases written into installed sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aliases {
    /// Import prefix for components, e.g. `~/components/ui`
    pub components: String,
    /// Import path of the class helper, e.g. `~/lib/utils`
    pub utils: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS_ALIAS.to_string(),
            utils: DEFAULT_UTILS_ALIAS.to_string(),
        }
    }
}

/// Contents of `uikit.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory components are copied into, relative to the project root
    pub component_dir: PathBuf,
    /// Location of the class helper file, relative to the project root
    pub utils_path: PathBuf,
    /// Import aliases
    #[serde(default)]
    pub aliases: Aliases,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            component_dir: PathBuf::from(DEFAULT_COMPONENT_DIR),
            utils_path: PathBuf::from(DEFAULT_UTILS_PATH),
            aliases: Aliases::default(),
        }
    }
}

impl ProjectConfig {
    /// Path of the config file inside a project
    pub fn path_in(project: &Path) -> PathBuf {
        project.join(CONFIG_FILE)
    }

    /// Parse config from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Load the config of the project at `project`
    pub fn load(project: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(project);
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| ConfigError::ParseError {
            path,
            error: e.to_string(),
        })
    }

    /// Write the config into the project at `project`
    pub fn save(&self, project: &Path) -> Result<PathBuf, ConfigError> {
        let path = Self::path_in(project);
        let content = self.to_json().map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Ok(path)
    }

    /// Absolute directory components are installed into
    pub fn component_root(&self, project: &Path) -> PathBuf {
        project.join(&self.component_dir)
    }

    /// Destination of `file` for an installed component
    pub fn component_path(&self, project: &Path, file: &str) -> PathBuf {
        self.component_root(project).join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::default();
        let path = config.save(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("uikit.json"));
        assert_eq!(ProjectConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = ProjectConfig::default().to_json().unwrap();
        assert!(json.contains("\"componentDir\""));
        assert!(json.contains("\"utilsPath\""));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_aliases_default_when_missing() {
        let config =
            ProjectConfig::from_json(r#"{"componentDir": "app/ui", "utilsPath": "app/cn.ts"}"#)
                .unwrap();
        assert_eq!(config.component_dir, PathBuf::from("app/ui"));
        assert_eq!(config.aliases, Aliases::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = ProjectConfig::from_json(
            r#"{"componentDir": "a", "utilsPath": "b", "tsx": true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("uikit.json"), "{ not json").unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_component_path() {
        let config = ProjectConfig::default();
        let path = config.component_path(Path::new("/proj"), "button.tsx");
        assert_eq!(path, PathBuf::from("/proj/src/components/ui/button.tsx"));
    }
}
