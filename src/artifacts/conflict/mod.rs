//! Conflict marker recognition
//!
//! A conflict region is delimited by three marker lines that must match the
//! configured literals exactly:
//!
//! ```text
//! <<<<<<< HEAD
//! ours
//! =======
//! theirs
//! >>>>>>> origin/main
//! ```
//!
//! - `lexer`: splits a document into plain spans and conflict regions
//! - `region`: the typed segments produced by the lexer
//! - `resolver`: applies resolution rules to a lexed document

pub mod lexer;
pub mod region;
pub mod resolver;

use serde::Deserialize;

pub const DEFAULT_OURS_MARKER: &str = "<<<<<<< HEAD";
pub const DEFAULT_SEPARATOR_MARKER: &str = "=======";
pub const DEFAULT_THEIRS_MARKER: &str = ">>>>>>> origin/main";

/// Line prefixes that always denote a marker, whatever label follows them.
const MARKER_PREFIXES: [&str; 3] = ["<<<<<<<", ">>>>>>>", "|||||||"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Separator,
    End,
    /// Looks like a marker but does not match the configured literals.
    Foreign,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConflictMarkers {
    pub ours: String,
    pub separator: String,
    pub theirs: String,
}

impl Default for ConflictMarkers {
    fn default() -> Self {
        ConflictMarkers {
            ours: DEFAULT_OURS_MARKER.to_string(),
            separator: DEFAULT_SEPARATOR_MARKER.to_string(),
            theirs: DEFAULT_THEIRS_MARKER.to_string(),
        }
    }
}

impl ConflictMarkers {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (role, literal) in [
            ("ours", &self.ours),
            ("separator", &self.separator),
            ("theirs", &self.theirs),
        ] {
            if literal.trim().is_empty() {
                anyhow::bail!("{role} marker cannot be empty");
            }
            if literal.contains('\n') {
                anyhow::bail!("{role} marker must be a single line");
            }
        }

        if self.ours == self.separator || self.ours == self.theirs || self.separator == self.theirs
        {
            anyhow::bail!("conflict markers must be distinct");
        }

        Ok(())
    }

    /// Classifies a line with its terminator already removed.
    pub fn classify(&self, line: &str) -> Option<Marker> {
        if line == self.ours {
            Some(Marker::Start)
        } else if line == self.separator {
            Some(Marker::Separator)
        } else if line == self.theirs {
            Some(Marker::End)
        } else if MARKER_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
        {
            Some(Marker::Foreign)
        } else {
            None
        }
    }
}

/// Strips a trailing `\n` or `\r\n` from a single line.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The line ending used by `text`, `\n` unless it contains a CRLF.
pub(crate) fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_default_markers() {
        let markers = ConflictMarkers::default();

        assert_eq!(markers.classify("<<<<<<< HEAD"), Some(Marker::Start));
        assert_eq!(markers.classify("======="), Some(Marker::Separator));
        assert_eq!(markers.classify(">>>>>>> origin/main"), Some(Marker::End));
        assert_eq!(markers.classify("const a = 1;"), None);
    }

    #[test]
    fn classify_other_labels_as_foreign() {
        let markers = ConflictMarkers::default();

        assert_eq!(markers.classify("<<<<<<< feature"), Some(Marker::Foreign));
        assert_eq!(markers.classify(">>>>>>> origin/dev"), Some(Marker::Foreign));
        assert_eq!(markers.classify("||||||| base"), Some(Marker::Foreign));
    }

    #[test]
    fn longer_rule_of_equals_is_not_a_separator() {
        let markers = ConflictMarkers::default();

        assert_eq!(markers.classify("========"), None);
    }

    #[test]
    fn validate_rejects_empty_and_duplicate_markers() {
        let empty = ConflictMarkers {
            ours: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let duplicate = ConflictMarkers {
            theirs: DEFAULT_SEPARATOR_MARKER.to_string(),
            ..Default::default()
        };
        assert!(duplicate.validate().is_err());

        assert!(ConflictMarkers::default().validate().is_ok());
    }

    #[test]
    fn strip_terminator_handles_crlf() {
        assert_eq!(strip_terminator("abc\r\n"), "abc");
        assert_eq!(strip_terminator("abc\n"), "abc");
        assert_eq!(strip_terminator("abc"), "abc");
    }
}
