//! Demo execution

pub mod driver;

pub use driver::{run_section, DemoDriver};
