//! Configuration module

use crate::error::{CliError, CliResult};
use listfmt_core::{Binding, OutputFormat, ProcessorConfig};
use std::fs;
use std::path::Path;

/// Load configuration from `path`, or defaults when no path is given
pub fn load(path: Option<&Path>) -> CliResult<ProcessorConfig> {
    let Some(path) = path else {
        log::debug!("No configuration file given, using defaults");
        return Ok(ProcessorConfig::default());
    };

    if !path.is_file() {
        return Err(CliError::ConfigNotFound(path.display().to_string()).into());
    }

    let source = fs::read_to_string(path)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
    let config = ProcessorConfig::from_toml_str(&source)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

    log::info!(
        "Loaded configuration from {} (format: {}, binding: {})",
        path.display(),
        config.format(),
        config.binding()
    );
    Ok(config)
}

/// Settings after merging command-line values over the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Output format to render with
    pub format: OutputFormat,
    /// Binding discipline to render through
    pub binding: Binding,
}

impl Resolved {
    /// Command-line values win; missing ones come from `config`
    pub fn merge(
        config: &ProcessorConfig,
        format: Option<OutputFormat>,
        binding: Option<Binding>,
    ) -> Self {
        Self {
            format: format.unwrap_or_else(|| config.format()),
            binding: binding.unwrap_or_else(|| config.binding()),
        }
    }
}
