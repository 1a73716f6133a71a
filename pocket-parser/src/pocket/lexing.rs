//! Line lexer for quiz files
//!
//!     Quiz files are split into numbered question blocks. A block starts on a line that
//!     holds a number and a period followed by whitespace ("3. Which of..."). The
//!     whitespace may be the line break itself, so a line reading just "3." opens a block
//!     too, unless it is the last line of the file: nothing follows it to count as the
//!     whitespace.
//!
//! Line Types
//!
//!         - Blank: empty or whitespace only
//!         - Heading: a numbered question line, see above
//!         - Marker: holds a check mark (the correct-answer marker)
//!         - Option: holds at least one A-D option label
//!         - Text: anything else
//!
//!     Classification order matters: a line can be a heading and hold options at the same
//!     time, and the heading wins. Only Blank and Heading drive the quiz state machine;
//!     Option and Marker are kept for inspection and diagnostics.
//!
//!     Lines are split on '\n' only. A trailing '\r' stays part of the line.
//!
//! Whitespace
//!
//!     Quiz files come out of word processors and sometimes carry the ASCII separator
//!     controls (0x1C-0x1F). They count as whitespace everywhere the parser looks for
//!     whitespace: blank lines, headings, trimming and the option tokenizer.

use crate::pocket::token::{tokenize, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// A numbered question line. `rest` starts after the first whitespace following the period.
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\x1C-\x1F]*\d+\.(?:[\s\x1C-\x1F](?P<rest>.*)|$)").unwrap()
});

/// Unicode whitespace plus the 0x1C-0x1F separators.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// `str::trim` over [is_space].
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// The classification of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Blank,
    Heading,
    Marker,
    Option,
    Text,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Blank => "BLANK",
            LineType::Heading => "HEADING",
            LineType::Marker => "MARKER",
            LineType::Option => "OPTION",
            LineType::Text => "TEXT",
        };
        write!(f, "{}", name)
    }
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    pub line_type: LineType,
    /// The raw line, without its '\n'
    pub text: String,
    /// For headings, the trimmed text after the number. Empty for a bare "3." line.
    pub heading_text: Option<String>,
}

impl LineToken {
    pub fn is_heading(&self) -> bool {
        self.line_type == LineType::Heading
    }

    pub fn is_blank(&self) -> bool {
        self.line_type == LineType::Blank
    }
}

/// Classify a single line.
///
/// `is_last` tells whether a line break follows the line in the source.
pub fn classify_line(line: &str, is_last: bool) -> LineToken {
    if trim_space(line).is_empty() {
        return LineToken {
            line_type: LineType::Blank,
            text: line.to_string(),
            heading_text: None,
        };
    }

    if let Some(captures) = HEADING_REGEX.captures(line) {
        let rest = captures.name("rest");
        if rest.is_some() || !is_last {
            let heading_text = rest.map(|m| trim_space(m.as_str())).unwrap_or("");
            return LineToken {
                line_type: LineType::Heading,
                text: line.to_string(),
                heading_text: Some(heading_text.to_string()),
            };
        }
    }

    let tokens = tokenize(line);
    let line_type = if tokens
        .iter()
        .any(|t| matches!(t, Token::Check | Token::AnswerMarker))
    {
        LineType::Marker
    } else if tokens.contains(&Token::OptionLabel) {
        LineType::Option
    } else {
        LineType::Text
    };

    LineToken {
        line_type,
        text: line.to_string(),
        heading_text: None,
    }
}

/// Split a source into lines and classify each of them.
pub fn tokenize_lines(source: &str) -> Vec<LineToken> {
    let lines: Vec<&str> = source.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| classify_line(line, i == last))
        .collect()
}
