// crates/shared-kernel/src/value_objects/sentinel.rs

/// Literal written in place of a field when nothing could be extracted.
///
/// Distinct from an empty string: empty means "looked, found an empty value",
/// the sentinel means "no data".
pub const NOT_AVAILABLE: &str = "N/A";

/// Return `value` unless it is empty, in which case the sentinel is used.
pub fn or_sentinel(value: String) -> String {
    if value.is_empty() { NOT_AVAILABLE.to_string() } else { value }
}
