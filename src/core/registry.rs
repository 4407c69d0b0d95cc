//! Built-in component registry
//!
//! Component sources ship inside the binary. Each definition lists the files
//! it writes, the other components it needs, and the npm packages its
//! sources import.

use crate::core::resolver::DependencyMap;

/// A single source file of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentFile {
    /// File name relative to the component directory
    pub path: &'static str,
    /// Source text, before import rewriting
    pub contents: &'static str,
}

/// An npm package required by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpmDependency {
    /// Package name
    pub name: &'static str,
    /// Minimum semver range the sources are written against
    pub version: &'static str,
}

/// A component that can be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDefinition {
    /// Registry key (kebab-case)
    pub name: &'static str,
    /// One-line description shown by `uikit list`
    pub description: &'static str,
    /// Files written into the component directory
    pub files: &'static [ComponentFile],
    /// Other components this one imports
    pub dependencies: &'static [&'static str],
    /// npm packages this one imports
    pub npm_dependencies: &'static [NpmDependency],
}

const KOBALTE: NpmDependency = NpmDependency {
    name: "@kobalte/core",
    version: "^0.13.7",
};

const CVA: NpmDependency = NpmDependency {
    name: "class-variance-authority",
    version: "^0.7.1",
};

/// Source of the `cn()` helper every component imports
pub const UTILS_SOURCE: &str = include_str!("../../components/lib/utils.ts");

/// npm packages the `cn()` helper imports
pub const UTILS_NPM_DEPENDENCIES: &[NpmDependency] = &[
    NpmDependency {
        name: "clsx",
        version: "^2.1.1",
    },
    NpmDependency {
        name: "tailwind-merge",
        version: "^2.5.4",
    },
];

macro_rules! component_file {
    ($name:literal) => {
        ComponentFile {
            path: concat!($name, ".tsx"),
            contents: include_str!(concat!("../../components/ui/", $name, ".tsx")),
        }
    };
}

const BUILTIN: &[ComponentDefinition] = &[
    ComponentDefinition {
        name: "accordion",
        description: "Vertically stacked headings that reveal a section of content",
        files: &[component_file!("accordion")],
        dependencies: &["collapsible"],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "alert",
        description: "Callout for user attention",
        files: &[component_file!("alert")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE, CVA],
    },
    ComponentDefinition {
        name: "alert-dialog",
        description: "Modal dialog that interrupts the user and expects a response",
        files: &[component_file!("alert-dialog")],
        dependencies: &["button"],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "badge",
        description: "Small status label",
        files: &[component_file!("badge")],
        dependencies: &[],
        npm_dependencies: &[CVA],
    },
    ComponentDefinition {
        name: "button",
        description: "Button with variants and sizes",
        files: &[component_file!("button")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE, CVA],
    },
    ComponentDefinition {
        name: "card",
        description: "Container with header, content and footer",
        files: &[component_file!("card")],
        dependencies: &[],
        npm_dependencies: &[],
    },
    ComponentDefinition {
        name: "collapsible",
        description: "Panel that expands and collapses",
        files: &[component_file!("collapsible")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "dialog",
        description: "Window overlaid on the primary content",
        files: &[component_file!("dialog")],
        dependencies: &["button"],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "label",
        description: "Accessible label for form controls",
        files: &[component_file!("label")],
        dependencies: &[],
        npm_dependencies: &[],
    },
    ComponentDefinition {
        name: "separator",
        description: "Visual divider between content",
        files: &[component_file!("separator")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "switch",
        description: "Toggle between checked and unchecked",
        files: &[component_file!("switch")],
        dependencies: &["label"],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "toggle",
        description: "Two-state button",
        files: &[component_file!("toggle")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE, CVA],
    },
    ComponentDefinition {
        name: "toggle-group",
        description: "Set of two-state buttons",
        files: &[component_file!("toggle-group")],
        dependencies: &["toggle"],
        npm_dependencies: &[KOBALTE],
    },
    ComponentDefinition {
        name: "tooltip",
        description: "Popup with information on hover or focus",
        files: &[component_file!("tooltip")],
        dependencies: &[],
        npm_dependencies: &[KOBALTE],
    },
];

/// Lookup over a set of component definitions
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentDefinition>,
}

impl Registry {
    /// The components shipped with uikit
    pub fn builtin() -> Self {
        Self::from_components(BUILTIN.to_vec())
    }

    /// Build a registry from explicit definitions
    pub fn from_components(mut components: Vec<ComponentDefinition>) -> Self {
        components.sort_by_key(|c| c.name);
        Self { components }
    }

    /// Look up a component by registry key
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components
            .binary_search_by_key(&name, |c| c.name)
            .ok()
            .map(|idx| &self.components[idx])
    }

    /// All components, sorted by name
    pub fn components(&self) -> &[ComponentDefinition] {
        &self.components
    }

    /// All component names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name).collect()
    }

    /// Component -> dependencies table for the resolver
    pub fn dependency_map(&self) -> DependencyMap {
        self.components
            .iter()
            .map(|c| (c.name, c.dependencies.iter().copied()))
            .collect()
    }
}

/// Normalize user input to a registry key
///
/// `Accordion` -> `accordion`, `ToggleGroup` -> `toggle-group`,
/// `alert_dialog` -> `alert-dialog`.
pub fn normalize_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.trim().chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) && !out.ends_with('-')
            {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}
