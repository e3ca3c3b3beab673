//! Text normalization.

/// Strip every character that is not an ASCII letter or whitespace and
/// lower-case the remainder.
///
/// Pure and total: any input, including the empty string, produces a valid
/// (possibly empty) string. Idempotent, and the output never contains a
/// character outside `[a-z\s]`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
