//! Component dependency resolution
//!
//! Walks the static component dependency graph breadth-first, installing each
//! reachable component at most once and partitioning the results into
//! installed and failed components.
//!
//! The resolver never touches the filesystem itself. Installing a single
//! component is delegated to an [`InstallExecutor`] and progress is reported
//! through a [`ProgressSink`], so the queue logic can be exercised without I/O.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Serialize, Serializer};

use crate::error::InstallError;

/// Successful outcome of installing a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    /// Files were written to the destination
    Copied,
    /// Destination already existed and overwrite was not requested.
    /// Counted as installed; nothing was written.
    AlreadyExists,
}

/// Installs a single component
pub trait InstallExecutor {
    /// Install `name`, returning how it was satisfied or why it failed
    fn install(&mut self, name: &str) -> Result<InstallOutcome, InstallError>;
}

impl<F> InstallExecutor for F
where
    F: FnMut(&str) -> Result<InstallOutcome, InstallError>,
{
    fn install(&mut self, name: &str) -> Result<InstallOutcome, InstallError> {
        self(name)
    }
}

/// Per-component progress event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallEvent<'a> {
    /// About to install the component
    Starting { name: &'a str },
    /// Component files were copied
    Succeeded { name: &'a str },
    /// Component already present, left untouched
    WarnedExists { name: &'a str },
    /// Installation failed
    Failed {
        name: &'a str,
        error: &'a InstallError,
    },
}

/// Receives progress events from the resolver
pub trait ProgressSink {
    /// Handle a single event
    fn on_event(&mut self, event: InstallEvent<'_>);
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_event(&mut self, _event: InstallEvent<'_>) {}
}

/// Immutable component -> dependencies lookup table
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Dependencies of `name` in declaration order.
    /// Names that are not in the map have no dependencies.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.edges.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether `name` is a key of the map
    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }
}

impl<N, D> FromIterator<(N, D)> for DependencyMap
where
    N: Into<String>,
    D: IntoIterator,
    D::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, D)>>(iter: T) -> Self {
        let edges = iter
            .into_iter()
            .map(|(name, deps)| (name.into(), deps.into_iter().map(Into::into).collect()))
            .collect();
        Self { edges }
    }
}

/// A component whose installation failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedComponent {
    /// Component name
    pub name: String,
    /// Why it failed
    #[serde(serialize_with = "serialize_display")]
    pub error: InstallError,
}

/// Final partition of processed components, each side in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Components present in the destination after the run
    pub installed: Vec<String>,
    /// Components that could not be installed
    pub failed: Vec<FailedComponent>,
}

impl Resolution {
    /// Whether `name` ended up installed
    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.iter().any(|n| n == name)
    }

    /// Whether `name` failed
    pub fn is_failed(&self, name: &str) -> bool {
        self.failed.iter().any(|f| f.name == name)
    }

    /// Whether any component failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

fn serialize_display<S: Serializer>(error: &InstallError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Install the requested components and everything they depend on
///
/// The queue is seeded with `requested` in order and drained front to back.
/// A component already installed or failed is skipped, so the executor runs
/// at most once per distinct name and cycles in `dependencies` terminate.
/// Dependencies of a component are only queued once it has been installed;
/// a failed component never pulls in its dependencies. Failures are recorded
/// and never stop the run.
pub fn resolve_and_install<I, E, S>(
    requested: I,
    dependencies: &DependencyMap,
    executor: &mut E,
    sink: &mut S,
) -> Resolution
where
    I: IntoIterator,
    I::Item: Into<String>,
    E: InstallExecutor + ?Sized,
    S: ProgressSink + ?Sized,
{
    let mut queue: VecDeque<String> = requested.into_iter().map(Into::into).collect();
    let mut installed: HashSet<String> = HashSet::new();
    let mut failed: HashSet<String> = HashSet::new();
    let mut resolution = Resolution::default();

    while let Some(name) = queue.pop_front() {
        if installed.contains(&name) || failed.contains(&name) {
            tracing::debug!("Skipping '{name}', already processed");
            continue;
        }

        sink.on_event(InstallEvent::Starting { name: &name });

        match executor.install(&name) {
            Ok(outcome) => {
                match outcome {
                    InstallOutcome::Copied => sink.on_event(InstallEvent::Succeeded { name: &name }),
                    InstallOutcome::AlreadyExists => {
                        sink.on_event(InstallEvent::WarnedExists { name: &name });
                    }
                }
                installed.insert(name.clone());

                for dep in dependencies.dependencies_of(&name) {
                    if !installed.contains(dep) && !queue.contains(dep) {
                        tracing::debug!("Queueing '{dep}' (required by '{name}')");
                        queue.push_back(dep.clone());
                    }
                }
                resolution.installed.push(name);
            }
            Err(error) => {
                tracing::info!("Failed to install '{name}': {error}");
                sink.on_event(InstallEvent::Failed {
                    name: &name,
                    error: &error,
                });
                failed.insert(name.clone());
                resolution.failed.push(FailedComponent { name, error });
            }
        }
    }

    resolution
}
