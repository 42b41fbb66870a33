//! listfmt command-line entry point

use anyhow::Result;
use clap::Parser;
use listfmt_cli::commands::Commands;
use std::io;
use std::path::PathBuf;

/// Render text items as Markdown or HTML lists
#[derive(Debug, Parser)]
#[command(name = "listfmt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "LISTFMT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.command.execute(cli.config.as_deref(), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["listfmt", "-v", "render", "-f", "html", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.items, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(args.format, Some(listfmt_core::OutputFormat::Html));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }
}
