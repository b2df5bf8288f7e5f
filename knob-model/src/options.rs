/// Map a numeric value onto an index of an options list.
///
/// The value is truncated towards zero and clamped into the list, so a stale
/// or fractional value still names a valid entry. Returns `None` for an
/// empty list.
pub fn option_index(value: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if !value.is_finite() || value <= 0.0 {
        return Some(0);
    }
    let index = value.trunc() as usize;
    Some(index.min(len - 1))
}

/// Display label for `value` in an enumerated property.
pub fn option_label(options: &[String], value: f64) -> &str {
    option_index(value, options.len())
        .and_then(|index| options.get(index))
        .map(String::as_str)
        .unwrap_or("")
}
