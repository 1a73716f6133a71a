//! SQL seed script
//!
//!     Renders a catalog as a one-shot migration against three tables:
//!
//!         lessons          (id, title, difficulty, description, progress_percent, quizzes_total)
//!         quizzes          (lesson_id, title, difficulty, total_marks, passing_marks)
//!         quiz_questions   (quiz_id, question, options, correct_option, points)
//!
//!     The script first drops a legacy lessons column and deletes every row seeded by a
//!     previous run (lessons whose title matches the title pattern, with their quizzes and
//!     questions), so it can be replayed. Then, per lesson: one lessons row, and when a quiz
//!     joins on the module id, one quizzes row and one quiz_questions row per question.
//!
//!     Quizzes and questions find their parent row by title, inside the database. Row ids
//!     come from `gen_random_uuid()` on the server; the script text itself is deterministic.
//!
//! Escaping
//!
//!     String literals only get their single quotes doubled. This is a seed script built
//!     from trusted files, not a general SQL generator.

use crate::emitter::Emitter;
use crate::error::EmitError;
use pocket_parser::pocket::{Catalog, CourseRecord, QuestionRecord, QuizRecord};
use serde::Deserialize;

/// Knobs for the generated script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SqlOptions {
    /// Schema holding the three tables
    pub schema: String,
    /// lessons column dropped before seeding
    pub legacy_column: String,
    /// LIKE pattern matching the titles of previously seeded lessons
    pub title_pattern: String,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            schema: "public".to_string(),
            legacy_column: "course_url".to_string(),
            title_pattern: "M%: %".to_string(),
        }
    }
}

/// Double every single quote.
pub fn escape_sql(text: &str) -> String {
    text.replace('\'', "''")
}

/// Reverse of [escape_sql].
pub fn unescape_sql(text: &str) -> String {
    text.replace("''", "'")
}

fn quoted(text: &str) -> String {
    format!("'{}'", escape_sql(text))
}

#[derive(Debug, Clone, Default)]
pub struct SqlEmitter {
    options: SqlOptions,
}

impl SqlEmitter {
    pub fn new(options: SqlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SqlOptions {
        &self.options
    }

    /// The script, one statement fragment per element.
    pub fn render_lines(&self, catalog: &Catalog) -> Vec<String> {
        let mut sql = self.preamble(catalog.lessons.len());
        for lesson in &catalog.lessons {
            self.push_lesson(&mut sql, lesson, catalog.quiz_for(&lesson.module_id));
        }
        sql
    }

    fn preamble(&self, lesson_count: usize) -> Vec<String> {
        let schema = &self.options.schema;
        let pattern = quoted(&self.options.title_pattern);
        let seeded_lessons =
            format!("SELECT id FROM {schema}.lessons WHERE title LIKE {pattern}");

        vec![
            format!("-- Final migration to seed all {lesson_count} modules and quizzes"),
            format!(
                "ALTER TABLE IF EXISTS {schema}.lessons DROP COLUMN IF EXISTS {} CASCADE;",
                self.options.legacy_column
            ),
            String::new(),
            "-- Clean up existing modules to avoid duplicates".to_string(),
            format!(
                "DELETE FROM {schema}.quiz_questions WHERE quiz_id IN (SELECT id FROM {schema}.quizzes WHERE lesson_id IN ({seeded_lessons}));"
            ),
            format!("DELETE FROM {schema}.quizzes WHERE lesson_id IN ({seeded_lessons});"),
            format!("DELETE FROM {schema}.lessons WHERE title LIKE {pattern};"),
            String::new(),
        ]
    }

    fn push_lesson(&self, sql: &mut Vec<String>, lesson: &CourseRecord, quiz: Option<&QuizRecord>) {
        let schema = &self.options.schema;
        let title = escape_sql(&lesson.title);

        sql.push(format!("-- Module {}", lesson.module_id));
        sql.push(format!(
            "INSERT INTO {schema}.lessons (id, title, difficulty, description, progress_percent, quizzes_total)"
        ));
        sql.push(format!(
            "VALUES (gen_random_uuid(), '{title}', {}, {}, 0, 1);",
            quoted(lesson.difficulty.as_str()),
            quoted(&lesson.content)
        ));

        if let Some(quiz) = quiz {
            let total = quiz.questions.len();
            let passing = (total / 2).max(1);
            sql.push(format!(
                "INSERT INTO {schema}.quizzes (lesson_id, title, difficulty, total_marks, passing_marks)"
            ));
            sql.push(format!(
                "SELECT id, '{title} Quiz', difficulty, {total}, {passing} FROM {schema}.lessons WHERE title = '{title}';"
            ));

            for question in &quiz.questions {
                sql.push(format!(
                    "INSERT INTO {schema}.quiz_questions (quiz_id, question, options, correct_option, points)"
                ));
                sql.push(format!(
                    "SELECT id, {}, {}, {}, 1 FROM {schema}.quizzes WHERE title = '{title} Quiz';",
                    quoted(&question.question),
                    options_array(question),
                    question.correct_option
                ));
            }
        }
        sql.push(String::new());
    }
}

fn options_array(question: &QuestionRecord) -> String {
    let items: Vec<String> = question.options.iter().map(|o| quoted(o)).collect();
    format!("ARRAY[{}]", items.join(", "))
}

impl Emitter for SqlEmitter {
    fn name(&self) -> &str {
        "sql"
    }

    fn description(&self) -> &str {
        "Seed script for the lessons, quizzes and quiz_questions tables"
    }

    fn file_extension(&self) -> &str {
        "sql"
    }

    fn emit(&self, catalog: &Catalog) -> Result<String, EmitError> {
        Ok(self.render_lines(catalog).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_parser::pocket::Difficulty;

    fn lesson(title: &str, module_id: &str) -> CourseRecord {
        CourseRecord {
            title: title.to_string(),
            content: "Body".to_string(),
            difficulty: Difficulty::Beginner,
            module_id: module_id.to_string(),
            file_stem: String::new(),
        }
    }

    fn quiz(module_id: &str, questions: usize) -> QuizRecord {
        QuizRecord {
            module_id: module_id.to_string(),
            file_stem: String::new(),
            questions: (0..questions)
                .map(|i| QuestionRecord {
                    question: format!("Q{}", i),
                    options: vec!["a".to_string()],
                    correct_option: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_escape_sql() {
        assert_eq!(escape_sql("It's"), "It''s");
        assert_eq!(escape_sql("no quotes \\ here"), "no quotes \\ here");
        assert_eq!(unescape_sql("It''s"), "It's");
    }

    #[test]
    fn test_passing_marks_floor() {
        let emitter = SqlEmitter::default();
        for (count, expected) in [(0, "0, 1"), (1, "1, 1"), (3, "3, 1"), (5, "5, 2")] {
            let catalog = Catalog::new(vec![lesson("M1: A", "M1")], vec![quiz("M1", count)]);
            let sql = emitter.emit(&catalog).unwrap();
            assert!(
                sql.contains(&format!("difficulty, {} FROM", expected)),
                "{} questions: {}",
                count,
                sql
            );
        }
    }

    #[test]
    fn test_lesson_without_quiz() {
        let catalog = Catalog::new(vec![lesson("M1: A", "M1")], vec![quiz("M2", 1)]);
        let sql = SqlEmitter::default().emit(&catalog).unwrap();
        assert!(!sql.contains("INSERT INTO public.quizzes"));
        assert!(!sql.contains("quiz_questions (quiz_id"));
        assert!(sql.ends_with("VALUES (gen_random_uuid(), 'M1: A', 'Beginner', 'Body', 0, 1);\n"));
    }

    #[test]
    fn test_custom_schema() {
        let emitter = SqlEmitter::new(SqlOptions {
            schema: "seed".to_string(),
            legacy_column: "legacy_url".to_string(),
            title_pattern: "Module %".to_string(),
        });
        let sql = emitter.emit(&Catalog::default()).unwrap();
        assert!(sql.contains("ALTER TABLE IF EXISTS seed.lessons DROP COLUMN IF EXISTS legacy_url CASCADE;"));
        assert!(sql.contains("DELETE FROM seed.lessons WHERE title LIKE 'Module %';"));
        assert!(sql.starts_with("-- Final migration to seed all 0 modules and quizzes"));
    }
}
