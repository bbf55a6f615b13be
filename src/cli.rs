//! CLI interface for commit-issues.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod config;
pub mod extract;

/// commit-issues: finds issue references in commit messages.
#[derive(Parser)]
#[command(name = "commit-issues")]
#[command(about = "Finds issue references in commit messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Extracts issue ids from a commit message.
    Extract(extract::ExtractCommand),
    /// Configuration operations.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Extract(extract_cmd) => extract_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}
