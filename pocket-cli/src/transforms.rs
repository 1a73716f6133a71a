//! Inspection transforms
//!
//! Each transform runs one parser stage on a single source file and renders the result,
//! which is how odd quiz files get debugged.

use pocket_parser::pocket::lexing::tokenize_lines;
use pocket_parser::pocket::{parse_course, parse_quiz};

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["lines", "quiz-json", "course-json"];

/// Execute a named transform on a source file
pub fn execute_transform(
    source: &str,
    filename: &str,
    transform_name: &str,
) -> Result<String, String> {
    match transform_name {
        "lines" => Ok(render_lines(source)),
        "quiz-json" => serde_json::to_string_pretty(&parse_quiz(source, filename))
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        "course-json" => serde_json::to_string_pretty(&parse_course(source, filename))
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        _ => Err(format!(
            "Unknown transform: {} (available: {})",
            transform_name,
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

/// One line per source line: number, classification, text.
///
/// Headings also show the question text the parser will use.
fn render_lines(source: &str) -> String {
    tokenize_lines(source.trim())
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = line.text.trim_end_matches('\r');
            let line_type = line.line_type.to_string();
            match &line.heading_text {
                Some(question) => format!("{:>4} {:<8} {} => {:?}", i + 1, line_type, text, question),
                None => format!("{:>4} {:<8} {}", i + 1, line_type, text),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
