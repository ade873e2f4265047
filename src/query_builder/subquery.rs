/// Indentation applied to every line of a nested query.
pub(crate) const SUBQUERY_INDENT: &str = "  ";

/// Wrap a finalized nested query in a `CALL { ... }` block.
///
/// Every line is indented by two spaces. A line terminator that is the very
/// last character of `subquery` gets no indent after it.
pub(crate) fn call_block(subquery: &str) -> String {
    let mut out = String::with_capacity(subquery.len() + 16);
    out.push_str("CALL {\n");
    out.push_str(SUBQUERY_INDENT);
    out.push_str(&indent_lines(subquery));
    out.push_str("\n}\n");
    out
}

fn indent_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let last = text.len().saturating_sub(1);
    for (i, c) in text.char_indices() {
        out.push(c);
        if c == '\n' && i != last {
            out.push_str(SUBQUERY_INDENT);
        }
    }
    out
}
