//! Quiz parsing over whole files
//!
//! Checks block segmentation, option extraction and answer extraction together, using the
//! fluent assertions from `pocket::testing`.

use pocket_parser::pocket::parsing::{parse_questions, parse_quiz};
use pocket_parser::pocket::testing::{assert_questions, assert_quiz};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("quizzes")
        .join(name);
    fs::read_to_string(path).expect("Failed to read quiz fixture")
}

#[test]
fn test_single_well_formed_block() {
    let questions = parse_questions("1. What is X?\nA) Foo B) Bar C) Baz D) Qux\n✅ Correct Answer: B");

    assert_questions(&questions).question_count(1).question(0, |q| {
        q.text("What is X?")
            .options(&["Foo", "Bar", "Baz", "Qux"])
            .correct(1)
            .correct_answer("Bar")
    });
}

#[test]
fn test_missing_marker_defaults_to_first_option() {
    let questions = parse_questions("1. Pick one\nA) left\nB) right");

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.option_count(2).correct(0));
}

#[test]
fn test_no_numbered_blocks() {
    assert_questions(&parse_questions("Just a heading\nand some prose")).is_empty();
    assert_questions(&parse_questions("")).is_empty();
}

#[test]
fn test_preamble_is_discarded() {
    let questions = parse_questions("Module 4 Quiz\nA) not an option\n\n1. Real?\nA) yes B) no");

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.text("Real?").options(&["yes", "no"]));
}

#[test]
fn test_numbered_option_line_starts_new_block() {
    // A numbered line inside a block always splits, even when it was meant as text
    let questions = parse_questions("1. First?\nA) a B) b\n2. Second?\nC) c D) d\n✅ Correct Answer: D");

    assert_questions(&questions)
        .question_count(2)
        .question(0, |q| q.options(&["a", "b"]).correct(0))
        .question(1, |q| q.text("Second?").options(&["c", "d"]).correct(3));
}

#[test]
fn test_index_may_exceed_option_count() {
    let questions = parse_questions("1. Short?\nA) only\n✅ Correct Answer: D");

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.option_count(1).correct(3));
    assert_eq!(questions[0].correct_answer(), None);
}

#[test]
fn test_trailing_bare_number_is_body_text() {
    let questions = parse_questions("1. Q?\nA) x B) y\n2.");

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.options(&["x", "y 2."]));
}

#[test]
fn test_windows_line_endings() {
    let questions = parse_questions("1. Q?\r\nA) x\r\nB) y\r\n✅ Correct Answer: B\r\n");

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.text("Q?").options(&["x", "y"]).correct(1));
}

#[rstest]
#[case("✅ Correct Answer: A", 0)]
#[case("✅ Correct Answer: B", 1)]
#[case("✅ Correct Answer: C", 2)]
#[case("✅ Correct Answer:   D", 3)]
#[case("✅ Correct Answer: E", 0)]
#[case("Correct Answer: C", 0)]
fn test_answer_marker(#[case] marker: &str, #[case] expected: usize) {
    let source = format!("1. Which?\nA) a\nB) b\nC) c\nD) d\n{}", marker);
    let questions = parse_questions(&source);

    assert_questions(&questions)
        .question_count(1)
        .question(0, |q| q.option_count(4).correct(expected));
}

#[test]
fn test_budgeting_quiz_fixture() {
    let quiz = parse_quiz(&fixture("Q1_Budgeting Quiz.txt"), "Q1_Budgeting Quiz.txt");

    assert_quiz(&quiz)
        .module_id("M1")
        .question_count(2)
        .question(0, |q| {
            q.text("What is a budget?")
                .options(&["A plan for money", "A bank account", "A loan", "A tax"])
                .correct(0)
        })
        .question(1, |q| {
            q.text("Which habit helps you save?")
                .options(&[
                    "Impulse buying",
                    "Tracking expenses",
                    "Ignoring bills",
                    "Borrowing often",
                ])
                .correct_answer("Tracking expenses")
        });
    assert_eq!(quiz.file_stem, "Q1_Budgeting Quiz");
}

#[test]
fn test_saving_quiz_fixture_drops_block_without_options() {
    let quiz = parse_quiz(&fixture("Q2_Saving Quiz.txt"), "Q2_Saving Quiz.txt");

    assert_quiz(&quiz)
        .module_id("M2")
        .question_count(1)
        .question(0, |q| {
            q.text_contains("savings goal")
                .option(2, "It's required")
                .correct(0)
        });
}
