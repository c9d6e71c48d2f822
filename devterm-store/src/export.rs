use crate::grouping::GroupedView;
use chrono::NaiveDate;

/// Title line of the exported document.
pub const EXPORT_TITLE: &str = "DEVTERM GLOSSARY - EXPORT";

/// Renders the grouped view as a plain-text document.
///
/// Layout: a header (title, generation date, username), then one section per
/// category — uppercased heading, dashed rule, entries sorted by term — with
/// each entry as `• term[ (fullForm)]` followed by an indented definition
/// line and a blank-line separator. The full form is suppressed when it only
/// repeats the term.
#[must_use]
pub fn render_export(view: &GroupedView, username: &str, date: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(EXPORT_TITLE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", date.format("%Y-%m-%d")));
    out.push_str(&format!("User: {username}\n"));
    out.push_str("=================================================\n\n");

    for (category, entries) in view {
        out.push_str(&format!("## {}\n", category.to_uppercase()));
        out.push_str("-------------------------------------------\n");

        let mut sorted = entries.clone();
        sorted.sort_by(|a, b| a.term.cmp(&b.term));

        for entry in &sorted {
            match entry.display_full_form() {
                Some(full_form) => out.push_str(&format!("• {} ({full_form})\n", entry.term)),
                None => out.push_str(&format!("• {}\n", entry.term)),
            }
            out.push_str(&format!("  > {}\n\n", entry.definition));
        }
        out.push('\n');
    }

    out
}

/// Suggested download file name, e.g. `DevTerm_alice_2026-08-29.txt`.
#[must_use]
pub fn export_file_name(username: &str, date: NaiveDate) -> String {
    format!("DevTerm_{username}_{}.txt", date.format("%Y-%m-%d"))
}
