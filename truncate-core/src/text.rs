//! Character-level helpers shared by the truncation routines.
//!
//! Every length in this crate counts Unicode scalar values (`char`), never
//! UTF-8 bytes. Slicing goes through [`char_indices`](str::char_indices) so a
//! cut can never land inside a multi-byte character.

/// Number of characters in `s`.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Convert a signed length into a character budget.
///
/// Negative values become `0`, values above `usize::MAX` saturate.
pub fn clamp_length(length: i64) -> usize {
    usize::try_from(length.max(0)).unwrap_or(usize::MAX)
}

/// The first `n` characters of `s`, or all of `s` if it is shorter.
pub fn leading(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The last `n` characters of `s`, or all of `s` if it is shorter.
///
/// `total` must be the character count of `s`.
pub fn trailing(s: &str, n: usize, total: usize) -> &str {
    let skip = total.saturating_sub(n);
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
