//! Positional truncation routines.
//!
//! [`truncate`] is the general entry point: it applies the length guard and
//! then dispatches on [`Position`]. The per-position routines assume the
//! guard has already run, i.e. that the input is longer than the budget.

use crate::position::Position;
use crate::text::{char_count, leading, trailing};


/// The default omission marker, a single horizontal ellipsis.
pub const DEFAULT_OMISSION: &str = "…";

/// Smallest budget that fits a one-character marker with a character on
/// each side.
const MIN_MIDDLE_LENGTH: usize = 3;

/// Truncate `text` to at most `length` characters, marking the cut with
/// `omission` at `position`.
///
/// Text that already fits is returned unchanged. Lengths count characters,
/// not bytes, so multi-byte text is never split inside a character.
///
/// # Examples
///
/// ```
/// use truncate_core::{Position, truncate};
///
/// let text = "This is a long text";
/// assert_eq!(truncate(text, 17, "...", Position::End), "This is a long...");
/// assert_eq!(truncate(text, 15, "...", Position::Start), "... a long text");
/// assert_eq!(truncate(text, 5, "zzz", Position::Middle), "Tzzzt");
/// ```
pub fn truncate(text: &str, length: usize, omission: &str, position: Position) -> String {
    let total = char_count(text);
    if total <= length {
        return text.to_string();
    }

    tracing::trace!(
        chars = total,
        length,
        %position,
        "truncate: cutting text"
    );

    match position {
        Position::Start => truncate_start(text, length, omission),
        Position::Middle => truncate_middle(text, total, length, omission),
        Position::End => truncate_end(text, length, omission),
    }
}

/// First `length` characters of `text`, no marker.
pub fn plain_cut(text: &str, length: usize) -> String {
    leading(text, length).to_string()
}

/// Marker first, then as many trailing characters as still fit.
fn truncate_start(text: &str, length: usize, omission: &str) -> String {
    let Some(keep) = retained(length, omission) else {
        return clip_marker(omission, length);
    };
    let tail = trailing(text, keep, char_count(text));
    let mut result = String::with_capacity(omission.len() + tail.len());
    result.push_str(omission);
    result.push_str(tail);
    result
}

/// Leading characters that still fit, then the marker.
fn truncate_end(text: &str, length: usize, omission: &str) -> String {
    let Some(keep) = retained(length, omission) else {
        return clip_marker(omission, length);
    };
    let head = leading(text, keep);
    let mut result = String::with_capacity(head.len() + omission.len());
    result.push_str(head);
    result.push_str(omission);
    result
}

/// Characters from both ends around the marker.
///
/// `total` is the character count of `text`. The output is exactly `length`
/// characters. Budgets below `MIN_MIDDLE_LENGTH` are plain-cut, and a
/// marker wider than the budget is clipped like at the other positions.
///
/// The leading share of the kept characters is rounded up for inputs of even
/// length and down for inputs of odd length.
fn truncate_middle(text: &str, total: usize, length: usize, omission: &str) -> String {
    if length < MIN_MIDDLE_LENGTH {
        tracing::debug!(
            length,
            "truncate: no room around middle marker, falling back to plain cut"
        );
        return plain_cut(text, length);
    }

    let Some(keep) = retained(length, omission) else {
        return clip_marker(omission, length);
    };

    let delta = if total % 2 == 0 {
        keep.div_ceil(2)
    } else {
        keep / 2
    };

    let head = leading(text, delta);
    let tail = trailing(text, keep - delta, total);
    let mut result = String::with_capacity(head.len() + omission.len() + tail.len());
    result.push_str(head);
    result.push_str(omission);
    result.push_str(tail);
    result
}

/// Input characters left once the marker is paid for, or `None` if the
/// marker alone overruns the budget.
fn retained(length: usize, omission: &str) -> Option<usize> {
    length.checked_sub(char_count(omission))
}

/// A marker wider than the budget is clipped to the budget.
fn clip_marker(omission: &str, length: usize) -> String {
    tracing::debug!(
        length,
        marker_len = char_count(omission),
        "truncate: marker exceeds length, clipping marker"
    );
    leading(omission, length).to_string()
}
