//! Escaping properties of string literals in the SQL script

use pocket_emit::formats::{escape_sql, unescape_sql};
use proptest::prelude::*;

proptest! {
    #[test]
    fn escape_round_trips(text in "\\PC*") {
        prop_assert_eq!(unescape_sql(&escape_sql(&text)), text);
    }

    #[test]
    fn escaped_quotes_come_in_pairs(text in "[a-z' ]*") {
        let escaped = escape_sql(&text);
        let quotes = escaped.chars().filter(|c| *c == '\'').count();
        prop_assert_eq!(quotes, 2 * text.chars().filter(|c| *c == '\'').count());
        prop_assert!(!escaped.replace("''", "").contains('\''));
    }
}
