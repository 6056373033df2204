//! Test: Default Run - the full demo with no configuration

use crate::helpers::*;
use pipeline_patterns::core::{Action, BuildAction, DeployAction, TestAction};
use pipeline_patterns::{DemoConfig, Section};
use std::collections::HashSet;

#[test]
fn test_default_run_is_byte_exact() {
    assert_eq!(run_demo(DemoConfig::default()), DEFAULT_OUTPUT);
}

#[test]
fn test_default_run_is_stable_across_runs() {
    let first = run_demo(DemoConfig::default());
    let second = run_demo(DemoConfig::default());
    assert_eq!(first, second);
}

#[test]
fn test_default_run_line_counts() {
    let output = run_demo(DemoConfig::default().with_headers(false));
    let lines: Vec<&str> = output.lines().collect();

    // 3 command + (1 + 2) decorator + 2 state + (1 + 2) factory
    assert_eq!(lines.len(), 11);
    assert_eq!(lines.iter().filter(|l| **l == DECORATOR_LINE).count(), 2);
}

#[test]
fn test_each_action_line_is_unique() {
    let actions: [&dyn Action; 3] = [&BuildAction, &TestAction, &DeployAction];
    let lines: HashSet<String> = actions.iter().map(|a| invoke_action(*a)).collect();

    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line.lines().count(), 1);
    }
}

#[test]
fn test_selected_sections_run_in_given_order() {
    let config = DemoConfig::default()
        .with_sections(vec![Section::Factory, Section::State])
        .with_headers(false);

    assert_eq!(
        run_demo(config),
        "Executing build steps...\n\
         Executing test steps...\n\
         Additional functionality added...\n\
         Pipeline is running...\n\
         Pipeline is paused...\n"
    );
}

#[test]
fn test_sink_errors_propagate() {
    let result = pipeline_patterns::DemoDriver::default().run(&mut FailingWriter);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
