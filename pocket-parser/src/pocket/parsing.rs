//! Parsers for course and quiz files
//!
//!     Both parsers take the raw file text and the file name, and always return a record.
//!     They never touch the filesystem; see [crate::pocket::loader] for that.

pub mod course;
pub mod quiz;

pub use course::{classify_difficulty, derive_title, file_stem, module_id, parse_course};
pub use quiz::{
    extract_correct_option, extract_options, parse_block, parse_questions, parse_quiz,
    quiz_module_id,
};

/// Extension of course and quiz source files
pub const SOURCE_EXTENSION: &str = ".txt";
