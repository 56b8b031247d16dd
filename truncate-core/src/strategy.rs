//! Named truncation strategies.
//!
//! A [`Strategy`] bundles an omission marker and a [`Position`] so call
//! sites can pick a behavior once and reuse it. The set is closed: the four
//! named variants use [`DEFAULT_OMISSION`], and [`Strategy::Custom`] covers
//! any other marker.

use crate::position::Position;
use crate::truncator::{DEFAULT_OMISSION, plain_cut, truncate};

/// A fixed truncation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Keep the leading characters, no marker.
    #[default]
    PlainCut,
    /// Keep the leading characters and append `…`.
    CutWithTrailingMarker,
    /// Prepend `…` and keep the trailing characters.
    CutWithLeadingMarker,
    /// Keep characters from both ends around a middle `…`.
    CutWithMiddleMarker,
    /// Any marker at any position.
    Custom {
        /// Text inserted where characters were removed.
        marker: String,
        /// Where the marker goes.
        position: Position,
    },
}

impl Strategy {
    /// Create a [`Strategy::Custom`] with the given marker and position.
    pub fn custom(marker: impl Into<String>, position: Position) -> Self {
        Self::Custom {
            marker: marker.into(),
            position,
        }
    }

    /// The default ellipsis at `position`.
    pub fn ellipsis(position: Position) -> Self {
        match position {
            Position::Start => Self::CutWithLeadingMarker,
            Position::Middle => Self::CutWithMiddleMarker,
            Position::End => Self::CutWithTrailingMarker,
        }
    }

    /// The marker and position this strategy stands for.
    ///
    /// Returns `None` for [`Strategy::PlainCut`], which inserts no marker.
    pub fn resolve(&self) -> Option<(&str, Position)> {
        match self {
            Self::PlainCut => None,
            Self::CutWithTrailingMarker => Some((DEFAULT_OMISSION, Position::End)),
            Self::CutWithLeadingMarker => Some((DEFAULT_OMISSION, Position::Start)),
            Self::CutWithMiddleMarker => Some((DEFAULT_OMISSION, Position::Middle)),
            Self::Custom { marker, position } => Some((marker.as_str(), *position)),
        }
    }

    /// Truncate `text` to `length` characters with this strategy.
    pub fn apply(&self, text: &str, length: usize) -> String {
        match self.resolve() {
            Some((marker, position)) => truncate(text, length, marker, position),
            None => plain_cut(text, length),
        }
    }
}

/// Truncate `text` to `length` characters using `strategy`.
///
/// # Examples
///
/// ```
/// use truncate_core::{Strategy, truncate_with};
///
/// assert_eq!(truncate_with("This is a long text", 9, &Strategy::PlainCut), "This is a");
/// assert_eq!(truncate_with("testttest", 5, &Strategy::CutWithMiddleMarker), "te…st");
/// ```
pub fn truncate_with(text: &str, length: usize, strategy: &Strategy) -> String {
    strategy.apply(text, length)
}

/// Truncation methods on string slices.
pub trait TruncateExt {
    /// Keep at most `length` characters, no marker.
    fn truncate_chars(&self, length: usize) -> String;

    /// Truncate to `length` characters using `strategy`.
    fn truncate_with(&self, length: usize, strategy: &Strategy) -> String;
}

impl TruncateExt for str {
    fn truncate_chars(&self, length: usize) -> String {
        plain_cut(self, length)
    }

    fn truncate_with(&self, length: usize, strategy: &Strategy) -> String {
        strategy.apply(self, length)
    }
}
