//! Pipeline context - delegates to a replaceable current state

use crate::core::state::PipelineState;
use std::io::{self, Write};
use tracing::debug;

/// Holds the current pipeline state and forwards `run` to it
///
/// A context always has a state; there is no way to construct or leave it
/// without one. Previous states are dropped on transition.
pub struct PipelineContext {
    state: Box<dyn PipelineState>,
}

impl PipelineContext {
    /// Create a context in the given initial state
    pub fn new(state: impl PipelineState + 'static) -> Self {
        Self {
            state: Box::new(state),
        }
    }

    /// Replace the current state
    pub fn change_state(&mut self, state: impl PipelineState + 'static) {
        debug!(from = self.state.name(), to = state.name(), "pipeline state changed");
        self.state = Box::new(state);
    }

    /// Name of the current state
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Run the pipeline in its current state
    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        self.state.invoke(out)
    }
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("state", &self.state.name())
            .finish()
    }
}
