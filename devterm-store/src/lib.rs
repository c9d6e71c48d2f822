//! In-memory dictionary state for DevTerm.
//!
//! The [`DictionaryStore`] is the authoritative, deduplicated collection of
//! glossary entries for the signed-in identity. The grouped
//! category-to-entries view is never stored alongside it; it is re-derived as
//! a pure function of the entries list ([`project`]) and memoized on the
//! store's version counter ([`GroupedProjection`]) so the two can never
//! diverge.
//!
//! Export rendering lives here too since it is a pure function of the grouped
//! view plus the identity's display name.

mod export;
mod grouping;
mod store;

pub use export::{export_file_name, render_export, EXPORT_TITLE};
pub use grouping::{project, GroupedProjection, GroupedView};
pub use store::DictionaryStore;
