//! Command pattern - pipeline actions as invokable objects

use std::io::{self, Write};

/// A unit of pipeline work wrapped as an object
pub trait Action {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Perform the action, describing it on `out`
    fn invoke(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Runs the build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildAction;

/// Runs the test suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestAction;

/// Ships the artifacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployAction;

impl Action for BuildAction {
    fn name(&self) -> &'static str {
        "build"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing build steps...")
    }
}

impl Action for TestAction {
    fn name(&self) -> &'static str {
        "test"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing test steps...")
    }
}

impl Action for DeployAction {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing deploy steps...")
    }
}
