//! Option tokenizer for question blocks
//!
//!     Options are not line based. A block may put all four options on one line
//!     ("A) Foo B) Bar C) Baz D) Qux"), spread one option over several lines, or follow the
//!     answer marker with more labels. The quiz parser therefore joins the body lines of a
//!     block into one working string and tokenizes that.
//!
//!     Boundaries:
//!
//!         - OptionLabel: an A-D letter directly followed by ")". An option's text starts
//!           right after it.
//!         - Check / AnswerMarker: the check mark ends the current option. The full
//!           "✅ Correct Answer:" phrase is its own token so the answer letter can be read
//!           from the token that follows it.
//!         - Letter: one A-D letter not followed by ")", including the first letter of a word ("Bar"
//!           is Letter then Text). Kept apart from Text so that a label glued to a word
//!           ("CD) ...") still produces its OptionLabel.
//!
//!     Every character of the input lands in exactly one token, so logos never reports an
//!     error for this token set.

use logos::Logos;
use std::fmt;

/// Tokens of a question block's working string
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"[A-D]\)")]
    OptionLabel,

    #[token("✅ Correct Answer:")]
    AnswerMarker,

    #[token("✅")]
    Check,

    #[regex(r"[A-D]")]
    Letter,

    #[regex(r"[\s\x1C-\x1F]+")]
    Whitespace,

    #[regex(r"[^A-D✅\s\x1C-\x1F]+")]
    Text,
}

impl Token {
    /// Tokens that close the option currently being read
    pub fn ends_option(&self) -> bool {
        matches!(
            self,
            Token::OptionLabel | Token::Check | Token::AnswerMarker
        )
    }

    /// Tokens whose first character is an A-D letter
    pub fn is_letter(&self) -> bool {
        matches!(self, Token::OptionLabel | Token::Letter)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::OptionLabel => "OPTION_LABEL",
            Token::AnswerMarker => "ANSWER_MARKER",
            Token::Check => "CHECK",
            Token::Letter => "LETTER",
            Token::Whitespace => "WHITESPACE",
            Token::Text => "TEXT",
        };
        write!(f, "{}", name)
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
