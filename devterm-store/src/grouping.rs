use crate::store::DictionaryStore;
use devterm_types::TermEntry;
use std::collections::BTreeMap;

/// Category → entries projection of the store.
///
/// Keys iterate in lexicographic order; entries within a category keep the
/// order they have in the source list. Derived state only — never stored
/// independently of the entries it was computed from.
pub type GroupedView = BTreeMap<String, Vec<TermEntry>>;

/// Groups entries by category, falling back to the "General" sentinel for
/// uncategorized entries.
///
/// Pure and stateless: every entry lands in exactly one bucket, input order
/// is preserved within each bucket, and no in-category sorting happens here
/// (export sorts by term at render time; the live view does not).
#[must_use]
pub fn project(entries: &[TermEntry]) -> GroupedView {
    let mut view = GroupedView::new();
    for entry in entries {
        view.entry(entry.category_or_default().to_string())
            .or_default()
            .push(entry.clone());
    }
    view
}

/// Memoized wrapper around [`project`], keyed on the store version.
///
/// Recomputes only when the store has changed since the cached projection
/// was taken.
#[derive(Debug, Default)]
pub struct GroupedProjection {
    cached_version: Option<u64>,
    view: GroupedView,
}

impl GroupedProjection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grouped view for the store's current contents,
    /// recomputing if the store version moved.
    pub fn view(&mut self, store: &DictionaryStore) -> &GroupedView {
        if self.cached_version != Some(store.version()) {
            self.view = project(store.entries());
            self.cached_version = Some(store.version());
        }
        &self.view
    }
}
