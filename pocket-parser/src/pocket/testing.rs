//! Fluent assertions for parsed quizzes
//!
//!     Tests should check what a parse produced, not how the records are laid out. Walking
//!     `quiz.questions[0].options[2]` by hand breaks as soon as a record changes shape and
//!     tends to stop at counting. The assertion API reads like the source file instead:
//!
//!     ```rust,ignore
//!     use pocket_parser::pocket::testing::assert_quiz;
//!
//!     assert_quiz(&quiz)
//!         .module_id("M1")
//!         .question_count(2)
//!         .question(0, |q| {
//!             q.text("What is a budget?")
//!                 .options(&["A plan for money", "A bank account", "A loan", "A tax"])
//!                 .correct(0)
//!         });
//!     ```
//!
//!     Failures panic with the full record in the message.

use super::records::{QuestionRecord, QuizRecord};

/// Start assertions on a quiz record.
pub fn assert_quiz(quiz: &QuizRecord) -> QuizAssertion<'_> {
    QuizAssertion {
        questions: &quiz.questions,
        module_id: Some(quiz.module_id.as_str()),
    }
}

/// Start assertions on a bare list of questions.
pub fn assert_questions(questions: &[QuestionRecord]) -> QuizAssertion<'_> {
    QuizAssertion {
        questions,
        module_id: None,
    }
}

pub struct QuizAssertion<'a> {
    questions: &'a [QuestionRecord],
    module_id: Option<&'a str>,
}

impl<'a> QuizAssertion<'a> {
    pub fn module_id(self, expected: &str) -> Self {
        assert_eq!(
            self.module_id,
            Some(expected),
            "module id mismatch for quiz {:#?}",
            self.questions
        );
        self
    }

    pub fn question_count(self, expected: usize) -> Self {
        assert_eq!(
            self.questions.len(),
            expected,
            "expected {} questions, got {:#?}",
            expected,
            self.questions
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.question_count(0)
    }

    pub fn question<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(QuestionAssertion<'a>) -> QuestionAssertion<'a>,
    {
        let question = self.questions.get(index).unwrap_or_else(|| {
            panic!(
                "no question at index {} (quiz has {})",
                index,
                self.questions.len()
            )
        });
        check(QuestionAssertion { question, index });
        self
    }
}

pub struct QuestionAssertion<'a> {
    question: &'a QuestionRecord,
    index: usize,
}

impl<'a> QuestionAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.question.question, expected,
            "question {} text mismatch",
            self.index
        );
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        assert!(
            self.question.question.contains(needle),
            "question {} text {:?} does not contain {:?}",
            self.index,
            self.question.question,
            needle
        );
        self
    }

    pub fn options(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.question.options, expected,
            "question {} options mismatch",
            self.index
        );
        self
    }

    pub fn option_count(self, expected: usize) -> Self {
        assert_eq!(
            self.question.options.len(),
            expected,
            "question {} has options {:?}",
            self.index,
            self.question.options
        );
        self
    }

    pub fn option(self, option: usize, expected: &str) -> Self {
        assert_eq!(
            self.question.options.get(option).map(String::as_str),
            Some(expected),
            "question {} option {} mismatch in {:?}",
            self.index,
            option,
            self.question.options
        );
        self
    }

    pub fn correct(self, expected: usize) -> Self {
        assert_eq!(
            self.question.correct_option, expected,
            "question {} correct option mismatch in {:#?}",
            self.index, self.question
        );
        self
    }

    pub fn correct_answer(self, expected: &str) -> Self {
        assert_eq!(
            self.question.correct_answer(),
            Some(expected),
            "question {} correct answer mismatch in {:#?}",
            self.index,
            self.question
        );
        self
    }
}
