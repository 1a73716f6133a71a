//! Course file parser
//!
//! A course file name carries most of the metadata: `M3_ Saving Goals.txt` is module `M3`,
//! titled `M3: Saving Goals`. Names that don't follow the pattern still get a title, with
//! underscores turned into colons.

use super::SOURCE_EXTENSION;
use crate::pocket::lexing::trim_space;
use crate::pocket::records::{CourseRecord, Difficulty};
use once_cell::sync::Lazy;
use regex::Regex;

static MODULE_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(M\d+)_ (.*)").unwrap());

/// Parse one course file into a record.
pub fn parse_course(content: &str, filename: &str) -> CourseRecord {
    let content = trim_space(content);
    CourseRecord {
        title: derive_title(filename),
        content: content.to_string(),
        difficulty: classify_difficulty(content, filename),
        module_id: module_id(filename).to_string(),
        file_stem: file_stem(filename),
    }
}

/// The file name with every `.txt` removed.
pub fn file_stem(filename: &str) -> String {
    filename.replace(SOURCE_EXTENSION, "")
}

/// `M<digits>_ <rest>` becomes `M<digits>: <rest>`, anything else has `_` replaced by `:`.
pub fn derive_title(filename: &str) -> String {
    let stem = file_stem(filename);
    match MODULE_TITLE_REGEX.captures(&stem) {
        Some(captures) => format!("{}: {}", &captures[1], &captures[2]),
        None => stem.replace('_', ":"),
    }
}

/// Case-sensitive search of both the content and the file name.
///
/// "Intermediate" is checked first, so a file mentioning both levels is Intermediate.
pub fn classify_difficulty(content: &str, filename: &str) -> Difficulty {
    let mentions = |word: &str| content.contains(word) || filename.contains(word);
    if mentions("Intermediate") {
        Difficulty::Intermediate
    } else if mentions("Advanced") {
        Difficulty::Advanced
    } else {
        Difficulty::Beginner
    }
}

/// The token before the first underscore, or the whole name when there is none.
pub fn module_id(filename: &str) -> &str {
    filename.split('_').next().unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_trims_content() {
        let record = parse_course("\n  Budgets help.\n\n", "M1_ Budgeting Basics.txt");
        assert_eq!(record.title, "M1: Budgeting Basics");
        assert_eq!(record.content, "Budgets help.");
        assert_eq!(record.difficulty, Difficulty::Beginner);
        assert_eq!(record.module_id, "M1");
        assert_eq!(record.file_stem, "M1_ Budgeting Basics");
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(derive_title("Intro_Money_Talk.txt"), "Intro:Money:Talk");
        // No space after the underscore
        assert_eq!(derive_title("M2_Saving.txt"), "M2:Saving");
    }

    #[test]
    fn test_module_id_without_underscore() {
        assert_eq!(module_id("Overview.txt"), "Overview.txt");
    }
}
