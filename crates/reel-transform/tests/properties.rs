//! Property tests for the normalizers and the deduplicator.

use proptest::prelude::*;
use proptest::test_runner::Config;
use reel_model::RawTable;
use reel_transform::{dedupe_rows, parse_runtime, split_genres};

fn table_strategy() -> impl Strategy<Value = RawTable> {
    prop::collection::vec(prop::collection::vec("[ab]{0,2}", 3), 0..24).prop_map(|rows| {
        RawTable::new(vec!["name".into(), "genres".into(), "rating".into()], rows)
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn dedupe_is_idempotent(table in table_strategy()) {
        let mut once = table.clone();
        dedupe_rows(&mut once);
        let mut twice = once.clone();
        let removed = dedupe_rows(&mut twice);
        prop_assert_eq!(removed, 0);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn dedupe_keeps_first_occurrences_in_order(table in table_strategy()) {
        let mut deduped = table.clone();
        dedupe_rows(&mut deduped);
        let mut expected: Vec<Vec<String>> = Vec::new();
        for row in &table.rows {
            if !expected.contains(row) {
                expected.push(row.clone());
            }
        }
        prop_assert_eq!(deduped.rows, expected);
    }

    #[test]
    fn runtime_is_hours_times_sixty_plus_minutes(h in 0u32..10, m in 0u32..60, pad in any::<bool>()) {
        let text = if pad { format!("{h}h {m:02}min") } else { format!("{h}h {m}min") };
        prop_assert_eq!(parse_runtime(&text), Some(h * 60 + m));
    }

    #[test]
    fn runtime_parser_is_total(text in ".*") {
        let _ = parse_runtime(&text);
    }

    #[test]
    fn genre_tags_are_trimmed_unique_and_non_empty(text in "[A-Za-z ;-]{0,40}") {
        let tags = split_genres(&text, ";");
        for (i, tag) in tags.iter().enumerate() {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tags[..i].contains(tag));
        }
    }
}
