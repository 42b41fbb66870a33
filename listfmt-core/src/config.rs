//! Processor configuration
//!
//! Configuration is plain TOML:
//!
//! ```toml
//! [output]
//! format = "html"
//!
//! [processor]
//! binding = "static"
//! ```
//!
//! Every section and key is optional; missing values fall back to defaults.

use crate::error::{Error, Result};
use crate::format::OutputFormat;
use crate::processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a processor resolves its strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Binding {
    /// Strategy held as a replaceable trait object
    #[default]
    Dynamic,
    /// Strategy fixed by the processor's type
    Static,
}

impl Binding {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Binding::Dynamic => "dynamic",
            Binding::Static => "static",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Binding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dynamic" => Ok(Binding::Dynamic),
            "static" => Ok(Binding::Static),
            _ => Err(Error::UnknownBinding {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Binding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Processor configuration
    #[serde(default)]
    pub processor: BindingConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used for rendering
    #[serde(default)]
    pub format: OutputFormat,
}

/// Processor-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    /// Strategy binding discipline
    #[serde(default)]
    pub binding: Binding,
}

impl ProcessorConfig {
    /// Configuration for the given format with default binding
    pub fn new(format: OutputFormat) -> Self {
        Self {
            output: OutputConfig { format },
            processor: BindingConfig::default(),
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source)?;
        Ok(config)
    }

    /// Serialize configuration as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        let rendered = toml::to_string(self)?;
        Ok(rendered)
    }

    /// Configured output format
    pub fn format(&self) -> OutputFormat {
        self.output.format
    }

    /// Configured binding discipline
    pub fn binding(&self) -> Binding {
        self.processor.binding
    }

    /// Build a switchable processor for the configured format
    pub fn build(&self) -> TextProcessor {
        TextProcessor::new(self.format())
    }
}
