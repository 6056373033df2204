//! Command-line interface

use crate::core::{DemoConfig, Section};
use clap::Parser;
use std::ffi::OsString;

/// Walk through Command, Decorator, State and Factory on a build pipeline
#[derive(Debug, Parser, Clone)]
#[command(name = "pipeline-patterns")]
#[command(version = "0.1.0")]
#[command(about = "Design patterns demonstrated on a build pipeline", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to demo configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sections to run, in order (overrides the config file)
    #[arg(short, long, value_enum)]
    pub section: Vec<SectionArg>,

    /// Don't print section headers
    #[arg(long)]
    pub no_headers: bool,
}

/// Section argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SectionArg {
    Command,
    Decorator,
    State,
    Factory,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Command => Section::Command,
            SectionArg::Decorator => Section::Decorator,
            SectionArg::State => Section::State,
            SectionArg::Factory => Section::Factory,
        }
    }
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: DemoConfig) -> DemoConfig {
        if !self.section.is_empty() {
            config = config.with_sections(self.section.iter().copied().map(Section::from).collect());
        }
        if self.no_headers {
            config = config.with_headers(false);
        }
        config
    }
}
