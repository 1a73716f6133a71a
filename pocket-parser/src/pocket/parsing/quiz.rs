//! Quiz file parser
//!
//!     A quiz file is a preamble followed by numbered question blocks:
//!
//!         Module 3 Quiz
//!
//!         1. What is a budget?
//!         A) A plan for money B) A bank account
//!         C) A loan D) A tax
//!         ✅ Correct Answer: A
//!
//!     Parsing runs in two passes. The line lexer ([crate::pocket::lexing]) classifies lines,
//!     and the state machine below groups them into blocks. Each block's body lines are then
//!     joined with single spaces into a working string, and the option tokenizer
//!     ([crate::pocket::token]) reads options and the answer letter from it.
//!
//! State Machine
//!
//!         Preamble           lines before the first heading are dropped
//!         AwaitingQuestion   after a bare "3." heading: the next non-blank line is the
//!                            question, verbatim, even if it looks like a heading itself
//!         CollectingOptions  body lines accumulate until the next heading
//!         Done               end of input, the open block is flushed
//!
//! Record Policy
//!
//!     A block becomes a [QuestionRecord] only when its question text is non-empty and at
//!     least one option was found. Blocks without an answer marker keep index 0.

use super::course::file_stem;
use crate::pocket::lexing::{is_space, tokenize_lines, trim_space, LineToken};
use crate::pocket::records::{QuestionRecord, QuizRecord};
use crate::pocket::token::{tokenize_with_spans, Token};
use std::mem;
use tracing::debug;

/// Parse one quiz file into a record.
pub fn parse_quiz(content: &str, filename: &str) -> QuizRecord {
    QuizRecord {
        module_id: quiz_module_id(filename),
        file_stem: file_stem(filename),
        questions: parse_questions(content),
    }
}

/// The lesson module id a quiz file joins to: `Q3_Saving.txt` gives `M3`.
pub fn quiz_module_id(filename: &str) -> String {
    super::course::module_id(filename).replace('Q', "M")
}

/// Split quiz text into question blocks and parse each of them.
pub fn parse_questions(content: &str) -> Vec<QuestionRecord> {
    let mut machine = QuizMachine::new();
    for line in tokenize_lines(trim_space(content)) {
        machine.feed(line);
    }
    machine.finish()
}

/// Build a question from its question line and the joined body text.
///
/// Returns `None` when the question is empty or no option was found.
pub fn parse_block(question: &str, body: &str) -> Option<QuestionRecord> {
    let question = trim_space(question);
    let tokens = tokenize_with_spans(body);
    let options = options_from_tokens(body, &tokens);

    if question.is_empty() || options.is_empty() {
        debug!(question, "dropping question block without options");
        return None;
    }

    Some(QuestionRecord {
        question: question.to_string(),
        options,
        correct_option: correct_option_from_tokens(body, &tokens).unwrap_or(0),
    })
}

/// Option texts in label order.
///
/// An option runs from its label to the next label, check mark or end of text, and is
/// trimmed. Empty options ("A)B) x") are kept.
pub fn extract_options(body: &str) -> Vec<String> {
    options_from_tokens(body, &tokenize_with_spans(body))
}

/// The zero-based index named by the first well-formed "✅ Correct Answer: X" marker.
pub fn extract_correct_option(body: &str) -> Option<usize> {
    correct_option_from_tokens(body, &tokenize_with_spans(body))
}

fn options_from_tokens(body: &str, tokens: &[(Token, logos::Span)]) -> Vec<String> {
    let mut options = Vec::new();
    let mut open: Option<usize> = None;

    for (token, span) in tokens {
        if token.ends_option() {
            if let Some(start) = open.take() {
                options.push(trim_space(&body[start..span.start]).to_string());
            }
        }
        if *token == Token::OptionLabel {
            open = Some(span.end);
        }
    }
    if let Some(start) = open {
        options.push(trim_space(&body[start..]).to_string());
    }

    options
}

fn correct_option_from_tokens(body: &str, tokens: &[(Token, logos::Span)]) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, (token, _))| *token == Token::AnswerMarker)
        .find_map(|(i, _)| {
            let (token, span) = tokens[i + 1..]
                .iter()
                .find(|(token, _)| *token != Token::Whitespace)?;
            if !token.is_letter() {
                return None;
            }
            body[span.clone()].bytes().next().map(letter_index)
        })
}

fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// A question block whose question line has been read.
#[derive(Debug)]
struct OpenBlock {
    question: String,
    body: Vec<String>,
}

impl OpenBlock {
    fn new(question: &str) -> Self {
        Self {
            question: trim_space(question).to_string(),
            body: Vec::new(),
        }
    }

    fn close(self) -> Option<QuestionRecord> {
        let body = self.body.join(" ");
        parse_block(&self.question, body.trim_end_matches(is_space))
    }
}

#[derive(Debug)]
enum State {
    Preamble,
    AwaitingQuestion,
    CollectingOptions(OpenBlock),
    Done,
}

struct QuizMachine {
    state: State,
    questions: Vec<QuestionRecord>,
}

impl QuizMachine {
    fn new() -> Self {
        Self {
            state: State::Preamble,
            questions: Vec::new(),
        }
    }

    fn feed(&mut self, line: LineToken) {
        self.state = match mem::replace(&mut self.state, State::Done) {
            State::Preamble if line.is_heading() => Self::open(&line),
            State::Preamble => State::Preamble,
            State::AwaitingQuestion if line.is_blank() => State::AwaitingQuestion,
            State::AwaitingQuestion => State::CollectingOptions(OpenBlock::new(&line.text)),
            State::CollectingOptions(block) if line.is_heading() => {
                self.close(block);
                Self::open(&line)
            }
            State::CollectingOptions(mut block) => {
                block.body.push(line.text);
                State::CollectingOptions(block)
            }
            State::Done => State::Done,
        };
    }

    fn open(heading: &LineToken) -> State {
        match heading.heading_text.as_deref() {
            Some(text) if !text.is_empty() => State::CollectingOptions(OpenBlock::new(text)),
            _ => State::AwaitingQuestion,
        }
    }

    fn close(&mut self, block: OpenBlock) {
        if let Some(question) = block.close() {
            self.questions.push(question);
        }
    }

    fn finish(mut self) -> Vec<QuestionRecord> {
        if let State::CollectingOptions(block) = mem::replace(&mut self.state, State::Done) {
            self.close(block);
        }
        self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_options_and_marker() {
        let body = "A) Foo B) Bar C) Baz D) Qux ✅ Correct Answer: C";
        assert_eq!(extract_options(body), vec!["Foo", "Bar", "Baz", "Qux"]);
        assert_eq!(extract_correct_option(body), Some(2));
    }

    #[test]
    fn test_marker_without_space_before_letter() {
        assert_eq!(extract_correct_option("✅ Correct Answer:D"), Some(3));
    }

    #[test]
    fn test_first_well_formed_marker_wins() {
        let body = "A) x ✅ Correct Answer: E ✅ Correct Answer: B";
        assert_eq!(extract_correct_option(body), Some(1));
    }

    #[test]
    fn test_malformed_marker() {
        assert_eq!(extract_correct_option("✅ Correct answer: B"), None);
        assert_eq!(extract_correct_option("Correct Answer: B"), None);
    }

    #[test]
    fn test_labels_after_marker_still_count() {
        let body = "A) Foo ✅ Correct Answer: B) Bar";
        assert_eq!(extract_options(body), vec!["Foo", "Bar"]);
        assert_eq!(extract_correct_option(body), Some(1));
    }

    #[test]
    fn test_empty_option_kept() {
        assert_eq!(extract_options("A)B) x"), vec!["", "x"]);
    }

    #[test]
    fn test_option_spanning_lines_keeps_inner_spacing() {
        let questions = parse_questions("1. Q?\nA) first\n   half B) two");
        assert_eq!(questions[0].options, vec!["first    half", "two"]);
    }

    #[test]
    fn test_bare_heading_takes_next_line_verbatim() {
        let questions = parse_questions("1.\n\n2. Looks numbered\nA) yes B) no");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "2. Looks numbered");
    }

    #[test]
    fn test_block_without_options_dropped() {
        assert!(parse_block("Why?", "no labels here").is_none());
        assert!(parse_block("  ", "A) x").is_none());
    }

    #[test]
    fn test_separator_controls_trimmed_from_question() {
        let questions = parse_questions("2. \x1C  x\nAB) ");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "x");
        assert_eq!(questions[0].options, vec![""]);
    }

    #[test]
    fn test_quiz_module_id() {
        assert_eq!(quiz_module_id("Q3_Saving Quiz.txt"), "M3");
        assert_eq!(quiz_module_id("QQ1_x.txt"), "MM1");
    }
}
