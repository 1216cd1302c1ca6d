/// Build the CURIE `prefix:identifier`, dropping a redundant copy of the
/// prefix that some vocabularies embed in their local identifiers.
///
/// The check is case-insensitive and only the first `prefix:` segment is
/// removed, so `("chebi", "CHEBI:123")` gives `"chebi:123"` while
/// `("chebi", "chebi:chebi:123")` gives `"chebi:chebi:123"`.
pub fn normalize_curie(prefix: &str, identifier: &str) -> String {
    let local = strip_prefix_ignore_case(identifier, prefix)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(identifier);
    format!("{prefix}:{local}")
}

/// Return the remainder of `s` after `prefix`, comparing characters without
/// regard to case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = s.chars();
    for expected in prefix.chars() {
        let actual = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(rest.as_str())
}
