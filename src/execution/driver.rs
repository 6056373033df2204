//! Demo driver - runs each pattern demonstration in order

use crate::core::{
    Action, AdvancedFactory, BasicFactory, BuildAction, BuildStep, DecoratedStep, DemoConfig,
    DeployAction, PausedState, PipelineContext, PipelineFactory, RunningState, Section, Step,
    TestAction, TestStep,
};
use std::io::{self, Write};
use tracing::debug;

/// Runs the configured sections against an output sink
#[derive(Debug, Clone, Default)]
pub struct DemoDriver {
    config: DemoConfig,
}

impl DemoDriver {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Run every configured section
    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        for (index, section) in self.config.sections.iter().enumerate() {
            if self.config.headers {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "--- {} Pattern ---", section.title())?;
            }
            debug!(%section, "running section");
            run_section(*section, out)?;
        }

        out.flush()?;
        debug!(sections = self.config.sections.len(), "demo finished");
        Ok(())
    }
}

/// Run a single section without a header
pub fn run_section(section: Section, out: &mut dyn Write) -> io::Result<()> {
    match section {
        Section::Command => command_demo(out),
        Section::Decorator => decorator_demo(out),
        Section::State => state_demo(out),
        Section::Factory => factory_demo(out),
    }
}

fn command_demo(out: &mut dyn Write) -> io::Result<()> {
    let actions: [&dyn Action; 3] = [&BuildAction, &TestAction, &DeployAction];
    for action in actions {
        debug!(action = action.name(), "invoking action");
        action.invoke(out)?;
    }
    Ok(())
}

fn decorator_demo(out: &mut dyn Write) -> io::Result<()> {
    BuildStep.invoke(out)?;
    DecoratedStep::new(TestStep).invoke(out)
}

fn state_demo(out: &mut dyn Write) -> io::Result<()> {
    let mut context = PipelineContext::new(RunningState);
    context.run(out)?;

    context.change_state(PausedState);
    context.run(out)
}

fn factory_demo(out: &mut dyn Write) -> io::Result<()> {
    let factories: [&dyn PipelineFactory; 2] = [&BasicFactory, &AdvancedFactory];
    for factory in factories {
        let step = factory.create_step();
        debug!(factory = factory.name(), step = step.name(), "created step");
        step.invoke(out)?;
    }
    Ok(())
}
