//! Extraction report types.

use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::extract::{OccurrenceIndex, PatchSetRef};
use crate::git::SHORT_HASH_LEN;

/// Issues extracted from one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Project the revision belongs to (absent for plain text input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Revision whose message was read (absent for plain text input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Patch set the revision was diffed as, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_set: Option<PatchSetRef>,
    /// Issue ids and the tags they carry.
    pub issues: OccurrenceIndex,
}

impl IssueReport {
    /// Creates a report for text that was not read from a repository.
    pub fn from_text(issues: OccurrenceIndex) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    /// Renders the report as human-readable text, one id per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if let Some(revision) = &self.revision {
            let short = revision.get(..SHORT_HASH_LEN).unwrap_or(revision);
            let project = self.project.as_deref().unwrap_or(".");
            match &self.patch_set {
                Some(patch_set) => {
                    let _ = writeln!(out, "{project} {short} (patch set {patch_set})");
                }
                None => {
                    let _ = writeln!(out, "{project} {short}");
                }
            }
        }

        if self.issues.is_empty() {
            out.push_str("No issues referenced\n");
            return out;
        }

        for (id, tags) in &self.issues {
            let labels: Vec<String> = tags.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "{id}: {}", labels.join(", "));
        }
        out
    }
}

/// Output format for extraction reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
