//! pipeline-patterns - Command, Decorator, State and Factory on a build pipeline

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use self::core::{Action, PipelineContext, PipelineFactory, PipelineState, Step};
pub use self::core::{ConfigError, DemoConfig, Section};
pub use execution::DemoDriver;
