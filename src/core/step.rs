//! Step domain model and the decorator that wraps it

use std::io::{self, Write};

/// A unit of pipeline work that can be decorated
pub trait Step {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Run the step, describing it on `out`
    fn invoke(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<S: Step + ?Sized> Step for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).invoke(out)
    }
}

/// Plain build step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStep;

/// Plain test step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestStep;

impl Step for BuildStep {
    fn name(&self) -> &'static str {
        "build"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing build steps...")
    }
}

impl Step for TestStep {
    fn name(&self) -> &'static str {
        "test"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing test steps...")
    }
}

/// Adds extra behavior after the wrapped step runs
///
/// The wrapped step is owned exclusively. Decorators nest to any depth;
/// the outermost layer's line is written last.
pub struct DecoratedStep {
    inner: Box<dyn Step>,
}

impl DecoratedStep {
    /// Wrap a step
    pub fn new(step: impl Step + 'static) -> Self {
        Self {
            inner: Box::new(step),
        }
    }

    /// The step this decorator wraps
    pub fn inner(&self) -> &dyn Step {
        self.inner.as_ref()
    }
}

impl Step for DecoratedStep {
    fn name(&self) -> &'static str {
        "decorated"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        self.inner.invoke(out)?;
        writeln!(out, "Additional functionality added...")
    }
}

impl std::fmt::Debug for DecoratedStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratedStep")
            .field("inner", &self.inner.name())
            .finish()
    }
}
