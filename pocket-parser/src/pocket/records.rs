//! Records produced by the parsers
//!
//!     Every record is built once during a scan and handed to an emitter unchanged. The
//!     field names of [QuestionRecord] are the JSON keys written by the JSON emitter, so
//!     renaming them changes the output format.

use serde::Serialize;
use std::fmt;

/// Difficulty tag of a course module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One course module, parsed from one lesson file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    /// Display title, `M3: Saving Goals` for well-formed file names
    pub title: String,
    /// Trimmed file content, written as the lesson description
    pub content: String,
    pub difficulty: Difficulty,
    /// Token before the first underscore of the file name
    pub module_id: String,
    /// File name with the `.txt` extension removed
    pub file_stem: String,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    /// Option texts in label order; the labels themselves are dropped
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct_option: usize,
}

impl QuestionRecord {
    /// The text of the correct option, if the index points into the options.
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.get(self.correct_option).map(String::as_str)
    }
}

/// All questions of one quiz file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizRecord {
    /// Join key against [CourseRecord::module_id] (`Q3` in the file name becomes `M3`)
    pub module_id: String,
    pub file_stem: String,
    pub questions: Vec<QuestionRecord>,
}

/// The result of scanning both source directories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub lessons: Vec<CourseRecord>,
    pub quizzes: Vec<QuizRecord>,
}

impl Catalog {
    pub fn new(lessons: Vec<CourseRecord>, quizzes: Vec<QuizRecord>) -> Self {
        Self { lessons, quizzes }
    }

    /// The quiz joined to a lesson's module id.
    ///
    /// When several quiz files share an id the one scanned last wins.
    pub fn quiz_for(&self, module_id: &str) -> Option<&QuizRecord> {
        self.quizzes
            .iter()
            .rev()
            .find(|quiz| quiz.module_id == module_id)
    }

    pub fn question_count(&self) -> usize {
        self.quizzes.iter().map(|quiz| quiz.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(module_id: &str, file_stem: &str) -> QuizRecord {
        QuizRecord {
            module_id: module_id.to_string(),
            file_stem: file_stem.to_string(),
            questions: Vec::new(),
        }
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn test_quiz_for_prefers_last_scanned() {
        let catalog = Catalog::new(
            Vec::new(),
            vec![quiz("M1", "Q1_First"), quiz("M1", "Q1_Second"), quiz("M2", "Q2")],
        );

        assert_eq!(catalog.quiz_for("M1").unwrap().file_stem, "Q1_Second");
        assert_eq!(catalog.quiz_for("M2").unwrap().file_stem, "Q2");
        assert!(catalog.quiz_for("M9").is_none());
    }

    #[test]
    fn test_correct_answer_out_of_range() {
        let question = QuestionRecord {
            question: "Q?".to_string(),
            options: Vec::new(),
            correct_option: 0,
        };
        assert_eq!(question.correct_answer(), None);
    }
}
