//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid component name (kebab-case)
    pub fn component_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,6})?"
    }

    /// Generate an npm-style semver range
    pub fn version_range() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["^", "~", ">=", ""]),
            0u32..20,
            0u32..20,
            0u32..20,
        )
            .prop_map(|(op, major, minor, patch)| format!("{op}{major}.{minor}.{patch}"))
    }

    /// Generate a dependency graph scenario
    ///
    /// Yields `(names, edges, requested, available)`: a pool of distinct
    /// names, a dependency list per name (cycles and self-edges allowed),
    /// a request list drawn from the pool with repeats, and the subset of
    /// names that have an installable source.
    #[allow(clippy::type_complexity)]
    pub fn dependency_graph(
    ) -> impl Strategy<Value = (Vec<String>, Vec<(String, Vec<String>)>, Vec<String>, Vec<String>)>
    {
        prop::collection::btree_set(component_name(), 1..10)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|names| {
                let n = names.len();
                (
                    Just(names),
                    prop::collection::vec(prop::collection::vec(0..n, 0..4), n),
                    prop::collection::vec(0..n, 1..6),
                    prop::collection::vec(any::<bool>(), n),
                )
            })
            .prop_map(|(names, deps, requested, has_source)| {
                let edges = names
                    .iter()
                    .zip(&deps)
                    .map(|(name, idx)| {
                        (name.clone(), idx.iter().map(|&i| names[i].clone()).collect())
                    })
                    .collect();
                let requested = requested.iter().map(|&i| names[i].clone()).collect();
                let available = names
                    .iter()
                    .zip(&has_source)
                    .filter(|&(_, &ok)| ok)
                    .map(|(name, _)| name.clone())
                    .collect();
                (names, edges, requested, available)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    #[test]
    fn test_version_range_covers_every_operator() {
        let mut runner = TestRunner::deterministic();
        let strategy = version_range();
        let ranges: Vec<String> = (0..200)
            .map(|_| strategy.new_tree(&mut runner).unwrap().current())
            .collect();

        assert!(ranges.iter().any(|r| r.starts_with('^')));
        assert!(ranges.iter().any(|r| r.starts_with('~')));
        assert!(ranges.iter().any(|r| r.starts_with(">=")));
        assert!(ranges
            .iter()
            .any(|r| r.starts_with(|c: char| c.is_ascii_digit())));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_component_name_generator(name in component_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!name.ends_with('-'));
        }

        #[test]
        fn test_version_range_generator(range in version_range()) {
            prop_assert!(semver::VersionReq::parse(&range).is_ok());
        }

        #[test]
        fn test_dependency_graph_references_pool(
            (names, edges, requested, available) in dependency_graph()
        ) {
            prop_assert_eq!(edges.len(), names.len());
            for (_, deps) in &edges {
                for dep in deps {
                    prop_assert!(names.contains(dep));
                }
            }
            for name in requested.iter().chain(&available) {
                prop_assert!(names.contains(name));
            }
        }
    }
}
