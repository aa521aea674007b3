/// Separator used by glossary fields that bundle several synonyms.
pub const SYNONYM_SEPARATOR: char = ',';

/// Split a field such as `"ecel, mevt"` on commas and trim every part.
///
/// Empty parts are kept (as empty synonyms) so that the number of synonyms
/// always equals the number of separators plus one.
///
/// ```rust
/// use canonical::split_synonyms;
///
/// assert_eq!(split_synonyms("ecel, mevt"), vec!["ecel", "mevt"]);
/// ```
pub fn split_synonyms(field: &str) -> Vec<&str> {
    split_synonyms_on(field, SYNONYM_SEPARATOR)
}

/// Same as [`split_synonyms`] with a caller-chosen separator.
pub fn split_synonyms_on(field: &str, separator: char) -> Vec<&str> {
    field.split(separator).map(str::trim).collect()
}
