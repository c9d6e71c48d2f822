use devterm_store::{project, DictionaryStore, GroupedProjection};
use devterm_types::{TermEntry, GENERAL_CATEGORY};

fn entry(term: &str, category: &str) -> TermEntry {
    TermEntry::new(term, "", category, "a definition")
}

// ── project ──────────────────────────────────────────────────────

#[test]
fn project_empty_list_yields_empty_view() {
    assert!(project(&[]).is_empty());
}

#[test]
fn project_groups_by_category() {
    let entries = vec![
        entry("Docker", "DevOps"),
        entry("React", "Frontend"),
        entry("Kubernetes", "DevOps"),
    ];
    let view = project(&entries);

    assert_eq!(view.len(), 2);
    assert_eq!(view["DevOps"].len(), 2);
    assert_eq!(view["Frontend"].len(), 1);
}

#[test]
fn project_partitions_exactly() {
    // Grouping completeness: every entry lands in exactly one bucket and the
    // bucket totals equal the input size.
    let entries = vec![
        entry("Docker", "DevOps"),
        entry("React", "Frontend"),
        entry("Api", ""),
        entry("Cache", "Backend"),
        entry("Vue", "Frontend"),
    ];
    let view = project(&entries);

    let total: usize = view.values().map(Vec::len).sum();
    assert_eq!(total, entries.len());
    for (category, bucket) in &view {
        for e in bucket {
            assert_eq!(e.category_or_default(), category);
        }
    }
}

#[test]
fn project_uses_general_fallback_for_uncategorized() {
    let view = project(&[entry("Api", "")]);
    assert_eq!(view[GENERAL_CATEGORY][0].term, "Api");
}

#[test]
fn project_preserves_input_order_within_category() {
    let entries = vec![
        entry("Zsh", "Tools"),
        entry("Awk", "Tools"),
        entry("Make", "Tools"),
    ];
    let view = project(&entries);
    let terms: Vec<&str> = view["Tools"].iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Zsh", "Awk", "Make"]);
}

#[test]
fn category_keys_iterate_in_lexicographic_order() {
    let entries = vec![
        entry("React", "Frontend"),
        entry("Docker", "DevOps"),
        entry("Tls", "Security"),
    ];
    let view = project(&entries);
    let keys: Vec<&str> = view.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["DevOps", "Frontend", "Security"]);
}

// ── GroupedProjection (memoization) ──────────────────────────────

#[test]
fn projection_reflects_store_contents() {
    let mut store = DictionaryStore::new();
    store.merge_batch(vec![entry("Docker", "DevOps")]);

    let mut projection = GroupedProjection::new();
    let view = projection.view(&store);
    assert_eq!(view["DevOps"][0].term, "Docker");
}

#[test]
fn projection_recomputes_after_store_change() {
    let mut store = DictionaryStore::new();
    store.merge_batch(vec![entry("Docker", "DevOps")]);

    let mut projection = GroupedProjection::new();
    assert_eq!(projection.view(&store).len(), 1);

    store.merge_batch(vec![entry("React", "Frontend")]);
    let view = projection.view(&store);
    assert_eq!(view.len(), 2);
    assert!(view.contains_key("Frontend"));
}

#[test]
fn projection_tracks_deletions() {
    let mut store = DictionaryStore::new();
    store.merge_batch(vec![entry("Docker", "DevOps"), entry("React", "Frontend")]);

    let mut projection = GroupedProjection::new();
    assert_eq!(projection.view(&store).len(), 2);

    store.delete_one("React");
    assert!(!projection.view(&store).contains_key("Frontend"));
}

#[test]
fn projection_of_empty_store_is_empty() {
    let store = DictionaryStore::new();
    let mut projection = GroupedProjection::new();
    assert!(projection.view(&store).is_empty());
}
