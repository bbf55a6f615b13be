//! Issue pattern configuration.
//!
//! Settings are read from a YAML file, looked up in this order:
//! an explicit path, `./.commit-issues.yaml`, then
//! `$HOME/.commit-issues/settings.yaml`. Environment variables take
//! precedence over file values.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extract::{ExtractError, IssuePattern};

/// Environment variable overriding the issue pattern.
pub const PATTERN_ENV: &str = "COMMIT_ISSUES_PATTERN";

/// Environment variable overriding the capture group index.
pub const GROUP_INDEX_ENV: &str = "COMMIT_ISSUES_GROUP_INDEX";

/// Group index used when none is configured.
pub const DEFAULT_GROUP_INDEX: usize = 1;

const LOCAL_CONFIG_FILE: &str = ".commit-issues.yaml";

/// Issue tracker settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueConfig {
    /// Regular expression matching issue references. Unset disables extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_pattern: Option<String>,

    /// Capture group holding the issue id (0 = whole match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_pattern_group_index: Option<usize>,
}

impl IssueConfig {
    /// Loads settings from `path`, or from the default locations when `None`,
    /// then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => match Self::default_paths().into_iter().find(|p| p.exists()) {
                Some(path) => Self::load_from_path(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Loads settings from a specific file; a missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        crate::data::from_yaml::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Candidate settings files, most specific first.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".commit-issues").join("settings.yaml"));
        }
        paths
    }

    /// Overrides file values with environment variables, when set.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(pattern) = env::var(PATTERN_ENV) {
            self.issue_pattern = Some(pattern);
        }
        if let Ok(index) = env::var(GROUP_INDEX_ENV) {
            let index = index
                .trim()
                .parse()
                .with_context(|| format!("{GROUP_INDEX_ENV} is not a group index: {index}"))?;
            self.issue_pattern_group_index = Some(index);
        }
        Ok(())
    }

    /// Compiles the configured pattern.
    ///
    /// A group index beyond the pattern's capture groups falls back to 1, or
    /// to 0 for a pattern without groups.
    pub fn issue_pattern(&self) -> Result<IssuePattern, ExtractError> {
        let Some(pattern) = self.issue_pattern.as_deref() else {
            return Ok(IssuePattern::disabled());
        };

        let regex = Regex::new(pattern)?;
        let groups = regex.captures_len() - 1;
        let requested = self.issue_pattern_group_index.unwrap_or(DEFAULT_GROUP_INDEX);
        let group = if requested <= groups {
            requested
        } else {
            let fallback = DEFAULT_GROUP_INDEX.min(groups);
            warn!(
                pattern,
                requested,
                fallback,
                "Issue pattern group index out of range"
            );
            fallback
        };

        Ok(IssuePattern::new(regex, group))
    }
}
