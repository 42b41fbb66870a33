//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use listfmt_core::{Binding, OutputFormat};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Format to preselect in the template
    #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
    pub format: OutputFormat,

    /// Binding to preselect in the template
    #[arg(short, long, value_name = "BINDING", default_value = "dynamic")]
    pub binding: Binding,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let template = self.generate_template();

        match &self.output {
            Some(path) => {
                fs::write(path, &template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                log::info!("Configuration template written to {}", path.display());
                writeln!(out, "✓ Configuration template generated: {}", path.display())?;
                writeln!(out, "  Use it with: listfmt --config {} render ITEM...", path.display())?;
            }
            None => out.write_all(template.as_bytes())?,
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# listfmt configuration

[output]
# List format: "markdown" (alias "md") or "html"
#   markdown -> one "* item" line per item, nothing around the list
#   html     -> "<ul>" block with one " <li>item</li>" line per item
format = "{}"

[processor]
# Strategy binding: "dynamic" or "static"
#   dynamic -> strategy can be switched between lists (render --then)
#   static  -> strategy fixed for the processor's lifetime
binding = "{}"
"#,
            self.format, self.binding
        )
    }
}
