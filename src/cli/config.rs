//! Configuration-related CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::IssueConfig;

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the effective issue pattern settings.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Settings file (defaults to .commit-issues.yaml, then ~/.commit-issues/settings.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let config = IssueConfig::load(self.config.as_deref())?;
        let pattern = config
            .issue_pattern()
            .context("Failed to compile issue pattern")?;

        let yaml = crate::data::to_yaml(&config).context("Failed to serialize settings")?;
        println!("{yaml}");
        if pattern.is_enabled() {
            println!("# effective group index: {}", pattern.group());
        } else {
            println!("# issue extraction disabled: no issue_pattern set");
        }
        Ok(())
    }
}
