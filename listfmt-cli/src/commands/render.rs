//! Render command implementation

use crate::config::Resolved;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use listfmt_core::{
    Binding, HtmlTextProcessor, MarkdownTextProcessor, OutputFormat, ProcessorConfig,
    TextProcessor,
};
use std::io::{self, BufRead, Write};

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Items to render, in order
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Also read items from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Output format
    #[arg(short, long, env = "LISTFMT_FORMAT", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Strategy binding (dynamic or static)
    #[arg(short, long, env = "LISTFMT_BINDING", value_name = "BINDING")]
    pub binding: Option<Binding>,

    /// Switch to this format after the first list and append the items again
    #[arg(long, value_name = "FORMAT")]
    pub then: Option<OutputFormat>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute<W: Write>(&self, config: &ProcessorConfig, out: &mut W) -> Result<()> {
        let mut items = self.items.clone();
        if self.stdin {
            items.extend(read_lines(io::stdin().lock())?);
        }

        let resolved = Resolved::merge(config, self.format, self.binding);
        log::info!(
            "Rendering {} items as {} ({} binding)",
            items.len(),
            resolved.format,
            resolved.binding
        );

        let rendered = self.render(&items, resolved)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Render `items` with the resolved settings
    pub fn render(&self, items: &[String], resolved: Resolved) -> Result<String> {
        match resolved.binding {
            Binding::Dynamic => {
                let mut processor = TextProcessor::new(resolved.format);
                processor.append_list(items);
                if let Some(next) = self.then {
                    log::debug!("Switching from {} to {}", resolved.format, next);
                    processor.set_output_format(next);
                    processor.append_list(items);
                }
                Ok(processor.into_string())
            }
            Binding::Static => {
                if self.then.is_some() {
                    return Err(CliError::InvalidArguments(
                        "--then requires dynamic binding".to_string(),
                    )
                    .into());
                }
                Ok(render_static(resolved.format, items))
            }
        }
    }
}

/// Render through a processor whose strategy is fixed by its type
fn render_static(format: OutputFormat, items: &[String]) -> String {
    match format {
        OutputFormat::Markdown => {
            let mut processor = MarkdownTextProcessor::new();
            processor.append_list(items);
            processor.into_string()
        }
        OutputFormat::Html => {
            let mut processor = HtmlTextProcessor::new();
            processor.append_list(items);
            processor.into_string()
        }
    }
}

/// Collect every line from `reader` as one item, blank lines included
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.context("Failed to read item from stdin"))
        .collect()
}
