//! CLI for the bmk bookmark converter.

mod commands;

use anyhow::Result;
use bmk_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_convert};

/// Top-level CLI for the bmk bookmark converter.
#[derive(Debug, Parser)]
#[command(name = "bmk")]
#[command(about = "bmk: CSV to Netscape bookmark file converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert the bookmark CSV into a Netscape bookmarks HTML file.
    Convert {
        /// Path to the input CSV (header columns `name` and `url`).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Path to write the bookmarks HTML document.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Unix-epoch seconds stamped on every entry and the toolbar folder.
        #[arg(long, value_name = "SECS")]
        timestamp: Option<u64>,
    },

    /// Parse and classify the bookmark CSV without writing any output.
    Check {
        /// Path to the input CSV (defaults to the configured input path).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                input,
                output,
                timestamp,
            } => run_convert(&cfg, input, output, timestamp)?,
            CliCommand::Check { input } => run_check(&cfg, input)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
