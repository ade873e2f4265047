//! Best-effort rendering of clause contents.
//!
//! Every item is always rendered. A failure is recorded and contributes an
//! empty string, so the rest of the clause is still emitted.

use super::errors::ErrorLog;
use crate::render::ToCypher;

pub(crate) const LIST_SEPARATOR: &str = ", ";

fn render_or_record<C: ToCypher>(item: &C, errors: &mut ErrorLog) -> String {
    match item.to_cypher() {
        Ok(text) => text,
        Err(e) => {
            errors.record(e);
            String::new()
        }
    }
}

/// Concatenate rendered items with no separator.
pub(crate) fn concat<C: ToCypher>(items: &[C], errors: &mut ErrorLog) -> String {
    items
        .iter()
        .map(|item| render_or_record(item, errors))
        .collect()
}

/// Join rendered items with `", "`.
///
/// The separator follows every item and the trailing one is trimmed, so a
/// failed item leaves an empty slot (`a, , c`).
pub(crate) fn comma_list<C: ToCypher>(items: &[C], errors: &mut ErrorLog) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&render_or_record(item, errors));
        out.push_str(LIST_SEPARATOR);
    }
    trim_separator(&out).to_string()
}

pub(crate) fn trim_separator(text: &str) -> &str {
    text.strip_suffix(LIST_SEPARATOR).unwrap_or(text)
}
