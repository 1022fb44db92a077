//! Column list normalization

/// Split a comma-separated column string into trimmed, non-empty names.
///
/// Order and duplicates are kept exactly as typed.
#[must_use]
pub fn normalize_columns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|col| !col.is_empty())
        .map(ToString::to_string)
        .collect()
}
