//! Step factories

use crate::core::step::{BuildStep, DecoratedStep, Step, TestStep};

/// Creates a step without exposing which concrete step it is
pub trait PipelineFactory {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Build a fresh step
    fn create_step(&self) -> Box<dyn Step>;
}

/// Produces a plain build step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicFactory;

/// Produces a test step wrapped in one decorator layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvancedFactory;

impl PipelineFactory for BasicFactory {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn create_step(&self) -> Box<dyn Step> {
        Box::new(BuildStep)
    }
}

impl PipelineFactory for AdvancedFactory {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn create_step(&self) -> Box<dyn Step> {
        Box::new(DecoratedStep::new(TestStep))
    }
}
