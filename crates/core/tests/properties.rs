//! Property tests for the pure engines
//!
//! These cover normalize, merge, filter and the export/import format over
//! arbitrary prompt collections.

use std::collections::HashSet;

use proptest::prelude::*;
use promptbox_core::{
    filter::filter,
    merge::merge,
    normalize::normalize,
    transfer::{export_payload, parse_import},
    Prompt, DEFAULT_CATEGORY,
};

fn arb_prompt() -> impl Strategy<Value = Prompt> {
    (
        "[a-f]{1,2}",
        "[A-Za-z ]{0,12}",
        prop::collection::vec("[a-zA-Z]{1,6}", 0..3),
        "[A-Za-z ]{0,20}",
        prop::option::of(prop_oneof![
            Just(String::new()),
            Just("Work".to_string()),
            Just("Fun".to_string()),
            Just(DEFAULT_CATEGORY.to_string()),
        ]),
        prop::option::of("2024-0[1-9]-1[0-9]T10:00:00Z"),
    )
        .prop_map(|(id, title, tags, text, category, created_at)| Prompt {
            id,
            title,
            tags,
            text,
            category,
            created_at,
        })
}

/// Collection with unique ids, as stored collections always are
fn arb_collection() -> impl Strategy<Value = Vec<Prompt>> {
    prop::collection::vec(arb_prompt(), 0..12).prop_map(|prompts| {
        let mut seen = HashSet::new();
        prompts
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect()
    })
}

fn is_subsequence(needle: &[Prompt], haystack: &[Prompt]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn normalize_fills_every_category(prompts in prop::collection::vec(arb_prompt(), 0..12)) {
        let lacking = prompts.iter().any(|p| p.lacks_category());
        let (updated, changed) = normalize(prompts.clone());

        prop_assert_eq!(updated.len(), prompts.len());
        prop_assert!(updated.iter().all(|p| !p.lacks_category()));
        prop_assert_eq!(changed, lacking);
    }

    #[test]
    fn merge_is_union_with_existing_precedence(
        existing in arb_collection(),
        incoming in prop::collection::vec(arb_prompt(), 0..12),
    ) {
        let (merged, report) = merge(existing.clone(), incoming.clone());

        let expected_ids: HashSet<&str> = existing
            .iter()
            .chain(incoming.iter())
            .map(|p| p.id.as_str())
            .collect();
        let merged_ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        let unique: HashSet<&str> = merged_ids.iter().copied().collect();

        prop_assert_eq!(merged_ids.len(), unique.len());
        prop_assert_eq!(unique, expected_ids);
        prop_assert_eq!(&merged[..existing.len()], &existing[..]);
        prop_assert_eq!(report.added + report.skipped, incoming.len());

        for prompt in &merged {
            if let Some(original) = existing.iter().find(|e| e.id == prompt.id) {
                prop_assert_eq!(prompt, original);
            }
        }
    }

    #[test]
    fn filter_returns_ordered_subset(
        prompts in prop::collection::vec(arb_prompt(), 0..12),
        term in "[a-zA-Z]{0,3}",
        category in prop_oneof![Just(String::new()), Just("Work".to_string()), Just(DEFAULT_CATEGORY.to_string())],
    ) {
        let shown = filter(&prompts, &term, &category);
        prop_assert!(is_subsequence(&shown, &prompts));
    }

    #[test]
    fn filter_with_wildcards_is_identity(prompts in prop::collection::vec(arb_prompt(), 0..12)) {
        prop_assert_eq!(filter(&prompts, "", ""), prompts);
    }

    #[test]
    fn export_import_roundtrip(prompts in arb_collection()) {
        let payload = export_payload(&prompts).unwrap();
        prop_assert_eq!(parse_import(payload.as_bytes()).unwrap(), prompts);
    }
}
