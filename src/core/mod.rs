//! Core domain models for the pattern demos
//!
//! Each module holds one pattern: actions (Command), steps (Decorator),
//! states and their context (State), and step factories (Factory).

pub mod command;
pub mod config;
pub mod context;
pub mod factory;
pub mod state;
pub mod step;

pub use command::*;
pub use config::{ConfigError, DemoConfig, Section};
pub use context::*;
pub use factory::*;
pub use state::*;
pub use step::*;
