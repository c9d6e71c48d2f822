use devterm_types::TermEntry;
use std::collections::HashSet;

/// The ordered, deduplicated collection of glossary entries for one identity.
///
/// Newest entries come first: a merged batch is prepended to the existing
/// collection. Every mutation that actually changes the collection bumps the
/// version counter, which the grouping projection uses as its memo key.
///
/// Two deliberate quirks of the original behavior are preserved:
/// - merge-time dedup is case-insensitive, but [`delete_one`] matches the
///   term exactly (case-sensitive);
/// - no dedup is performed *within* an incoming batch, so a batch carrying
///   two case-insensitive duplicates may insert both.
///
/// [`delete_one`]: DictionaryStore::delete_one
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    entries: Vec<TermEntry>,
    version: u64,
}

impl DictionaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current entries, newest first.
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Change counter; bumps on every mutation that changed the collection.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Merges a classification batch into the store.
    ///
    /// Entries whose lower-cased term already exists in the store are
    /// dropped; the survivors keep their relative order and are prepended
    /// (newest first). Returns the actually-added subset — when it is empty
    /// the store is untouched and callers must not persist.
    pub fn merge_batch(&mut self, accepted: Vec<TermEntry>) -> Vec<TermEntry> {
        let existing: HashSet<String> = self.entries.iter().map(TermEntry::dedup_key).collect();
        let added: Vec<TermEntry> = accepted
            .into_iter()
            .filter(|e| !existing.contains(&e.dedup_key()))
            .collect();

        if added.is_empty() {
            return added;
        }

        let mut merged = added.clone();
        merged.append(&mut self.entries);
        self.entries = merged;
        self.version += 1;
        added
    }

    /// Removes all entries whose term exactly equals `term`.
    ///
    /// Exact match only — `delete_one("docker")` does not remove "Docker".
    /// Idempotent; returns whether anything was removed.
    pub fn delete_one(&mut self, term: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.term != term);
        let removed = self.entries.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }

    /// Empties the collection unconditionally.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.version += 1;
    }

    /// Replaces the collection wholesale.
    ///
    /// Used at the sign-in/sign-out boundary; the contents come *from*
    /// persistence, so callers must not re-save after a load.
    pub fn load(&mut self, entries: Vec<TermEntry>) {
        self.entries = entries;
        self.version += 1;
    }
}
