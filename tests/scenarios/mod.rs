//! Scenario-based tests for pipeline-patterns

mod default_run;
mod factory_determinism;
