//! Extract command: reports the issue ids referenced by a commit message.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::IssueConfig;
use crate::data::{IssueReport, OutputFormat};
use crate::extract::{extract_from_text, IssueExtractor, IssuePattern, PatchSetRef};
use crate::git::GitSite;

/// Extract command options.
#[derive(Parser)]
pub struct ExtractCommand {
    /// Revision to read the commit message of.
    #[arg(value_name = "REVISION", default_value = "HEAD")]
    pub revision: String,

    /// Directory holding the project repositories (defaults to the current directory).
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Project (repository) name below --repo; `.` means --repo itself.
    #[arg(long, default_value = ".")]
    pub project: String,

    /// Reads the message from a file instead of a revision (`-` for stdin).
    #[arg(long, value_name = "PATH", conflicts_with_all = ["change", "patch_set"])]
    pub message_file: Option<PathBuf>,

    /// Change number, to mark ids added since the previous patch set.
    #[arg(long, requires = "patch_set")]
    pub change: Option<u64>,

    /// Patch set number of the revision within --change.
    #[arg(long, requires = "change")]
    pub patch_set: Option<u32>,

    /// Settings file (defaults to .commit-issues.yaml, then ~/.commit-issues/settings.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

impl ExtractCommand {
    /// Executes the extract command.
    pub fn execute(self) -> Result<()> {
        let config = IssueConfig::load(self.config.as_deref())?;
        let pattern = config
            .issue_pattern()
            .context("Failed to compile issue pattern")?;
        if !pattern.is_enabled() {
            tracing::warn!("No issue pattern configured; nothing will be extracted");
        }

        let report = self.build_report(pattern)?;
        output_report(&report, self.format)
    }

    fn build_report(&self, pattern: IssuePattern) -> Result<IssueReport> {
        if let Some(path) = &self.message_file {
            let message = read_message(path)?;
            return Ok(IssueReport::from_text(extract_from_text(&pattern, &message)));
        }

        let site = GitSite::new(&self.repo);
        let extractor = IssueExtractor::new(
            pattern,
            Box::new(site.clone()),
            Box::new(site.patch_sets()),
        );

        let patch_set = match (self.change, self.patch_set) {
            (Some(change), Some(number)) => Some(PatchSetRef::new(change, number)),
            _ => None,
        };

        let issues = match &patch_set {
            Some(patch_set) => extractor
                .extract_for_patch_set(&self.project, &self.revision, patch_set)
                .with_context(|| {
                    format!("Failed to extract issues for patch set {patch_set}")
                })?,
            None => extractor
                .extract_for_revision(&self.project, &self.revision)
                .with_context(|| format!("Failed to extract issues for {}", self.revision))?,
        };

        Ok(IssueReport {
            project: Some(self.project.clone()),
            revision: Some(self.revision.clone()),
            patch_set,
            issues,
        })
    }
}

fn read_message(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut message = String::new();
        std::io::stdin()
            .read_to_string(&mut message)
            .context("Failed to read commit message from stdin")?;
        return Ok(message);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read commit message file: {}", path.display()))
}

/// Outputs the report in the specified format.
fn output_report(report: &IssueReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", report.to_text());
            Ok(())
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;
            println!("{json}");
            Ok(())
        }
        OutputFormat::Yaml => {
            let yaml = crate::data::to_yaml(report).context("Failed to serialize report to YAML")?;
            println!("{yaml}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        extract: ExtractCommand,
    }

    #[test]
    fn defaults() {
        let cli = TestCli::try_parse_from(["extract"]).unwrap();
        assert_eq!(cli.extract.revision, "HEAD");
        assert_eq!(cli.extract.project, ".");
        assert_eq!(cli.extract.format, OutputFormat::Text);
        assert!(cli.extract.change.is_none());
    }

    #[test]
    fn change_requires_patch_set() {
        assert!(TestCli::try_parse_from(["extract", "--change", "4"]).is_err());
        let cli =
            TestCli::try_parse_from(["extract", "--change", "4", "--patch-set", "2"]).unwrap();
        assert_eq!(cli.extract.change, Some(4));
        assert_eq!(cli.extract.patch_set, Some(2));
    }

    #[test]
    fn message_file_conflicts_with_patch_set() {
        assert!(TestCli::try_parse_from([
            "extract",
            "--message-file",
            "msg",
            "--change",
            "4",
            "--patch-set",
            "2"
        ])
        .is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(TestCli::try_parse_from(["extract", "--format", "xml"]).is_err());
    }

    #[test]
    fn report_from_message_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("MSG");
        std::fs::write(&path, "Fix bug#42\n\nBug: bug#42\n").unwrap();

        let cli = TestCli::try_parse_from([
            "extract",
            "--message-file",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let pattern = IssuePattern::compile(r"bug#(\d+)", 1).unwrap();
        let report = cli.extract.build_report(pattern).unwrap();

        assert!(report.revision.is_none());
        assert_eq!(
            report.to_text(),
            "42: somewhere, subject, footer, footer-Bug\n"
        );
    }

    #[test]
    fn missing_message_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_message(&temp_dir.path().join("missing")).is_err());
    }
}
