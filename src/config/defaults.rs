//! Default configuration values

/// Project config file name
pub const CONFIG_FILE: &str = "uikit.json";

/// npm manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Default component directory, relative to the project root
pub const DEFAULT_COMPONENT_DIR: &str = "src/components/ui";

/// Default location of the class helper, relative to the project root
pub const DEFAULT_UTILS_PATH: &str = "src/lib/utils.ts";

/// Default import prefix for components
pub const DEFAULT_COMPONENTS_ALIAS: &str = "~/components/ui";

/// Default import path of the class helper
pub const DEFAULT_UTILS_ALIAS: &str = "~/lib/utils";

/// Environment variable overriding package manager detection
pub const PACKAGE_MANAGER_ENV: &str = "UIKIT_PACKAGE_MANAGER";

/// Hint printed when components fail to install
pub const LIST_HINT: &str = "Run `uikit list` to see available components.";
