use serde::{Deserialize, Serialize};

/// Sentinel category for entries the classification service left uncategorized.
pub const GENERAL_CATEGORY: &str = "General";

/// One glossary record.
///
/// Entries are immutable once created; the store mutates its collection as a
/// whole (add/remove) and never edits fields in place. Uniqueness within a
/// store is enforced case-insensitively on `term` at merge time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermEntry {
    /// Canonical display key, normalized by the classification service to a
    /// compound-word capitalization convention (e.g. "api gateway" →
    /// "ApiGateway").
    pub term: String,
    /// Optional expansion (e.g. "SaaS" → "Software as a Service"). May equal
    /// `term`, in which case it is treated as absent for display purposes.
    pub full_form: String,
    /// Grouping key; empty means uncategorized.
    pub category: String,
    /// One-line free-text definition.
    pub definition: String,
}

impl TermEntry {
    pub fn new(
        term: impl Into<String>,
        full_form: impl Into<String>,
        category: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            full_form: full_form.into(),
            category: category.into(),
            definition: definition.into(),
        }
    }

    /// The case-insensitive uniqueness key used by merge-time deduplication.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        self.term.to_lowercase()
    }

    /// The full form, or `None` when it is empty or merely repeats the term
    /// (case-insensitively) and carries no extra information.
    #[must_use]
    pub fn display_full_form(&self) -> Option<&str> {
        if self.full_form.is_empty() || self.full_form.to_lowercase() == self.term.to_lowercase() {
            None
        } else {
            Some(&self.full_form)
        }
    }

    /// The category, falling back to [`GENERAL_CATEGORY`] when empty.
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        if self.category.is_empty() {
            GENERAL_CATEGORY
        } else {
            &self.category
        }
    }
}
