//! Pipeline state variants

use std::io::{self, Write};

/// Behavior selected by a [`PipelineContext`](crate::core::PipelineContext)
pub trait PipelineState {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Describe the pipeline in this state on `out`
    fn invoke(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Pipeline is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningState;

/// Pipeline is paused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PausedState;

impl PipelineState for RunningState {
    fn name(&self) -> &'static str {
        "running"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Pipeline is running...")
    }
}

impl PipelineState for PausedState {
    fn name(&self) -> &'static str {
        "paused"
    }

    fn invoke(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Pipeline is paused...")
    }
}
