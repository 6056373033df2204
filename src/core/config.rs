//! Demo configuration from YAML

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// One pattern demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Command,
    Decorator,
    State,
    Factory,
}

impl Section {
    /// All sections in canonical order
    pub const ALL: [Section; 4] = [
        Section::Command,
        Section::Decorator,
        Section::State,
        Section::Factory,
    ];

    /// Title used in the section header
    pub fn title(&self) -> &'static str {
        match self {
            Section::Command => "Command",
            Section::Decorator => "Decorator",
            Section::State => "State",
            Section::Factory => "Factory",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Command => "command",
            Section::Decorator => "decorator",
            Section::State => "state",
            Section::Factory => "factory",
        };
        f.write_str(name)
    }
}

/// Error types for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("At least one section must be selected")]
    EmptySections,

    #[error("Duplicate section: {0}")]
    DuplicateSection(Section),
}

/// Which demonstrations to run and how to present them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Sections to run, in order
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    /// Print `--- X Pattern ---` headers between sections
    #[serde(default = "default_headers")]
    pub headers: bool,
}

fn default_sections() -> Vec<Section> {
    Section::ALL.to_vec()
}

fn default_headers() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            headers: default_headers(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::EmptySections);
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section) {
                return Err(ConfigError::DuplicateSection(*section));
            }
        }

        Ok(())
    }

    /// Replace the section list
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Toggle section headers
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}
