//! Main module for pocket parsing functionality

pub mod error;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod records;
pub mod testing;
pub mod token;

pub use error::LoaderError;
pub use loader::{CatalogLoader, SourceDirs};
pub use parsing::{parse_course, parse_quiz};
pub use records::{Catalog, CourseRecord, Difficulty, QuestionRecord, QuizRecord};
