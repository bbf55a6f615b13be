//! Commit message partitioning into subject, body and footer.

/// The structural zones of a commit message.
///
/// Zones are decided purely by position: the first line is the subject, the
/// last blank-line separated paragraph (if it is not the subject paragraph) is
/// the footer, and everything in between is body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessageZones {
    subject: String,
    body_lines: Vec<String>,
    footer_lines: Vec<String>,
}

impl CommitMessageZones {
    /// Splits a raw commit message into its zones.
    pub fn parse(message: &str) -> Self {
        let mut paragraphs = paragraphs(message);
        if paragraphs.is_empty() {
            return Self::default();
        }

        // A leading blank line leaves the subject empty; the first paragraph
        // then follows the subject like any other.
        if message.lines().next().is_some_and(is_blank) {
            paragraphs.insert(0, vec![""]);
        }

        let footer_lines = if paragraphs.len() > 1 {
            paragraphs.pop().unwrap_or_default()
        } else {
            Vec::new()
        };

        let mut lines = paragraphs.into_iter().flatten();
        let subject = lines.next().unwrap_or_default().to_string();
        let body_lines = lines.map(str::to_string).collect();

        Self {
            subject,
            body_lines,
            footer_lines: footer_lines.into_iter().map(str::to_string).collect(),
        }
    }

    /// The subject line, empty if the message starts with a blank line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Body lines in message order.
    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    /// Footer lines in message order.
    pub fn footer_lines(&self) -> &[String] {
        &self.footer_lines
    }

    /// Body lines joined by newlines.
    pub fn body(&self) -> String {
        self.body_lines.join("\n")
    }

    /// Footer lines joined by newlines.
    pub fn footer(&self) -> String {
        self.footer_lines.join("\n")
    }

    /// Whether the message had no non-blank content at all.
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.body_lines.is_empty() && self.footer_lines.is_empty()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Groups the message into runs of non-blank lines.
fn paragraphs(message: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for line in message.lines() {
        if is_blank(line) {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_messages_have_no_zones() {
        for message in ["", "\n", "\n\n", "\n\n\n", "  \n\t\n"] {
            let zones = CommitMessageZones::parse(message);
            assert!(zones.is_empty(), "{message:?}");
        }
    }

    #[test]
    fn single_line_is_subject_only() {
        let zones = CommitMessageZones::parse("Foo bug#4711 bar");
        assert_eq!(zones.subject(), "Foo bug#4711 bar");
        assert!(zones.body_lines().is_empty());
        assert!(zones.footer_lines().is_empty());
    }

    #[test]
    fn lines_after_subject_without_blank_line_are_body() {
        let zones = CommitMessageZones::parse("Subject\nBody one\nBody two\n");
        assert_eq!(zones.subject(), "Subject");
        assert_eq!(zones.body_lines(), ["Body one", "Body two"]);
        assert!(zones.footer_lines().is_empty());
    }

    #[test]
    fn last_paragraph_is_footer() {
        let zones = CommitMessageZones::parse(
            "Subject\n\nFirst body\n\nSecond body\nmore\n\nBug: 42\nChange-Id: I1234\n\n",
        );
        assert_eq!(zones.subject(), "Subject");
        assert_eq!(zones.body_lines(), ["First body", "Second body", "more"]);
        assert_eq!(zones.footer_lines(), ["Bug: 42", "Change-Id: I1234"]);
        assert_eq!(zones.body(), "First body\nSecond body\nmore");
        assert_eq!(zones.footer(), "Bug: 42\nChange-Id: I1234");
    }

    #[test]
    fn footer_needs_no_keyed_lines() {
        let zones = CommitMessageZones::parse("Subject\n\njust some text");
        assert_eq!(zones.footer_lines(), ["just some text"]);
        assert!(zones.body_lines().is_empty());
    }

    #[test]
    fn seeded_body_precedes_middle_paragraphs() {
        let zones = CommitMessageZones::parse("Subject\nseeded\n\nmiddle\n\nFooter: x");
        assert_eq!(zones.body_lines(), ["seeded", "middle"]);
        assert_eq!(zones.footer_lines(), ["Footer: x"]);
    }

    #[test]
    fn leading_blank_line_leaves_subject_empty() {
        let zones = CommitMessageZones::parse(
            "\nBody references bug#16.\nBody also references bug#176.\n\nBug: bug#4711 in footer",
        );
        assert_eq!(zones.subject(), "");
        assert_eq!(
            zones.body_lines(),
            ["Body references bug#16.", "Body also references bug#176."]
        );
        assert_eq!(zones.footer_lines(), ["Bug: bug#4711 in footer"]);
    }

    #[test]
    fn leading_whitespace_only_line_counts_as_blank() {
        let zones = CommitMessageZones::parse("   \nbug#42\n\nBug: x");
        assert_eq!(zones.subject(), "");
        assert_eq!(zones.body_lines(), ["bug#42"]);
        assert_eq!(zones.footer_lines(), ["Bug: x"]);
    }

    #[test]
    fn leading_blank_lines_before_single_paragraph_make_it_footer() {
        let zones = CommitMessageZones::parse("\n\nbug#42");
        assert_eq!(zones.subject(), "");
        assert!(zones.body_lines().is_empty());
        assert_eq!(zones.footer_lines(), ["bug#42"]);
        assert!(!zones.is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let zones = CommitMessageZones::parse("Subject\r\n\r\nBody\r\n\r\nBug: 1\r\n");
        assert_eq!(zones.subject(), "Subject");
        assert_eq!(zones.body_lines(), ["Body"]);
        assert_eq!(zones.footer_lines(), ["Bug: 1"]);
    }
}
