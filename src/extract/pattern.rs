//! Issue pattern matching.

use regex::Regex;
use tracing::debug;

/// A configured issue pattern together with the capture group holding the id.
///
/// An absent regex means extraction is disabled: every scan yields nothing.
#[derive(Debug, Clone, Default)]
pub struct IssuePattern {
    regex: Option<Regex>,
    group: usize,
}

impl IssuePattern {
    /// Creates a pattern extracting capture group `group` (0 = whole match).
    pub fn new(regex: Regex, group: usize) -> Self {
        Self {
            regex: Some(regex),
            group,
        }
    }

    /// Creates a pattern that never matches anything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Compiles `pattern` and wraps it.
    pub fn compile(pattern: &str, group: usize) -> Result<Self, regex::Error> {
        Ok(Self::new(Regex::new(pattern)?, group))
    }

    /// Returns the underlying regex, if configured.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Returns the capture group index ids are taken from.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Whether a regex is configured.
    pub fn is_enabled(&self) -> bool {
        self.regex.is_some()
    }

    /// Lazily yields the ids found in `text`, left to right.
    ///
    /// Matches whose target group did not participate, or matched the empty
    /// string, are skipped.
    pub fn find_ids<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let group = self.group;
        self.regex.iter().flat_map(move |regex| {
            debug!(pattern = %regex, group, "Matching text against issue pattern");
            regex
                .captures_iter(text)
                .filter_map(move |caps| caps.get(group))
                .map(|m| m.as_str())
                .filter(|id| !id.is_empty())
        })
    }
}
