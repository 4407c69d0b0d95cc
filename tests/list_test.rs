//! Integration tests for `uikit list` command

mod common;

use common::{stdout, TestProject};

/// Test: list prints every component with its dependencies
#[test]
fn test_list_human() {
    let project = TestProject::new();

    let output = project.run(&["list"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("Available components:"));
    assert!(out.contains("accordion"));
    assert!(out.contains("(requires collapsible)"));
    assert!(out.contains("toggle-group"));
}

/// Test: list --json is parseable and sorted
#[test]
fn test_list_json() {
    let project = TestProject::new();

    let output = project.run(&["list", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    let components = json.as_array().expect("array of components");

    let names: Vec<&str> = components
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let accordion = components
        .iter()
        .find(|c| c["name"] == "accordion")
        .expect("accordion listed");
    assert_eq!(accordion["dependencies"], serde_json::json!(["collapsible"]));
    assert_eq!(
        accordion["npmDependencies"],
        serde_json::json!(["@kobalte/core"])
    );
}

/// Test: list --quiet prints nothing
#[test]
fn test_list_quiet() {
    let project = TestProject::new();

    let output = project.run(&["list", "--quiet"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}
