//! CLI command implementations

use crate::config;
use anyhow::Result;
use clap::Subcommand;
use listfmt_core::OutputFormat;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub mod generate_config;
pub mod render;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render items as a formatted list
    Render(render::RenderArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Print a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One row of the format listing
#[derive(Debug, Serialize)]
pub struct FormatInfo {
    /// Canonical format name
    pub name: &'static str,
    /// Name of the strategy rendering it
    pub strategy: &'static str,
    /// What the output looks like
    pub summary: &'static str,
}

impl Commands {
    /// Execute the command, writing results to `out`
    ///
    /// Only `render` reads the configuration file at `config_path`.
    pub fn execute<W: Write>(&self, config_path: Option<&Path>, out: &mut W) -> Result<()> {
        match self {
            Commands::Render(args) => {
                let config = config::load(config_path)?;
                args.execute(&config, out)
            }
            Commands::List { subcommand } => subcommand.execute(out),
            Commands::GenerateConfig(args) => args.execute(out),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Formats { json } => {
                let formats = format_infos();
                if *json {
                    serde_json::to_writer_pretty(&mut *out, &formats)?;
                    writeln!(out)?;
                } else {
                    for info in &formats {
                        writeln!(out, "{:<10} {:<10} {}", info.name, info.strategy, info.summary)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Describe every supported format
pub fn format_infos() -> Vec<FormatInfo> {
    OutputFormat::ALL
        .iter()
        .map(|format| FormatInfo {
            name: format.name(),
            strategy: format.strategy().name(),
            summary: format.summary(),
        })
        .collect()
}
