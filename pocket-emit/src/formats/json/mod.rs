//! JSON export
//!
//! A single document with two arrays:
//!
//! ```text
//! {"lessons":[{"title":..,"content":..}],"quizzes":[{"title":..,"questions":[..]}]}
//! ```
//!
//! Titles here are the file names without extension, not the `M1: ...` display titles,
//! and neither difficulty nor module id is exported.

use crate::emitter::Emitter;
use crate::error::EmitError;
use pocket_parser::pocket::{Catalog, QuestionRecord};
use serde::Serialize;

#[derive(Serialize)]
struct Export<'a> {
    lessons: Vec<LessonEntry<'a>>,
    quizzes: Vec<QuizEntry<'a>>,
}

#[derive(Serialize)]
struct LessonEntry<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct QuizEntry<'a> {
    title: &'a str,
    questions: &'a [QuestionRecord],
}

impl<'a> From<&'a Catalog> for Export<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Export {
            lessons: catalog
                .lessons
                .iter()
                .map(|lesson| LessonEntry {
                    title: &lesson.file_stem,
                    content: &lesson.content,
                })
                .collect(),
            quizzes: catalog
                .quizzes
                .iter()
                .map(|quiz| QuizEntry {
                    title: &quiz.file_stem,
                    questions: &quiz.questions,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Emitter for JsonEmitter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Lessons and quizzes as a single JSON document"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn emit(&self, catalog: &Catalog) -> Result<String, EmitError> {
        let export = Export::from(catalog);
        let json = if self.pretty {
            serde_json::to_string_pretty(&export)?
        } else {
            serde_json::to_string(&export)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_parser::pocket::{CourseRecord, Difficulty};

    #[test]
    fn test_empty_catalog() {
        let json = JsonEmitter::default().emit(&Catalog::default()).unwrap();
        assert_eq!(json, r#"{"lessons":[],"quizzes":[]}"#);
    }

    #[test]
    fn test_compact_output_keeps_utf8() {
        let lesson = CourseRecord {
            title: "M1: Café".to_string(),
            content: "Save ✅".to_string(),
            difficulty: Difficulty::Beginner,
            module_id: "M1".to_string(),
            file_stem: "M1_ Café".to_string(),
        };
        let json = JsonEmitter::default()
            .emit(&Catalog::new(vec![lesson], vec![]))
            .unwrap();
        assert_eq!(
            json,
            r#"{"lessons":[{"title":"M1_ Café","content":"Save ✅"}],"quizzes":[]}"#
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let json = JsonEmitter::new(true).emit(&Catalog::default()).unwrap();
        assert!(json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["lessons"].as_array().unwrap().is_empty());
    }
}
