//! Character-aware text truncation.
//!
//! Shortens text to a character budget for labels, log lines and previews,
//! optionally marking the cut with an omission marker at the start, middle
//! or end. Lengths count `char`s, so multi-byte text is never split.
//!
//! ```
//! use truncate_core::{Position, Strategy, TruncateExt, truncate};
//!
//! assert_eq!(truncate("This is a long text", 17, "...", Position::End), "This is a long...");
//! assert_eq!("testttest".truncate_with(5, &Strategy::CutWithMiddleMarker), "te…st");
//! ```

pub mod config;
pub mod position;
pub mod strategy;
pub mod text;
pub mod truncator;

pub use config::{ConfigError, TruncateConfig};
pub use position::{ParsePositionError, Position};
pub use strategy::{Strategy, TruncateExt, truncate_with};
pub use text::{char_count, clamp_length};
pub use truncator::{DEFAULT_OMISSION, plain_cut, truncate};
