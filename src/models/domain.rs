//! Domain name helpers for availability lookups.

/// Top-level suffixes offered for every availability lookup, in query order.
pub const SUPPORTED_SUFFIXES: &[&str] = &["co.uk", "com", "org", "org.uk", "uk"];

/// Extracts the base label from a user-supplied domain query.
///
/// The query is trimmed and lowercased and everything from the first `.`
/// is dropped, so `"Example.co.uk"` becomes `"example"`. Returns `None`
/// when nothing usable is left.
pub fn base_label(query: &str) -> Option<String> {
    let label = query
        .trim()
        .split('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Builds one candidate domain per supported suffix.
pub fn candidate_domains(label: &str) -> Vec<String> {
    SUPPORTED_SUFFIXES
        .iter()
        .map(|suffix| format!("{}.{}", label, suffix))
        .collect()
}
