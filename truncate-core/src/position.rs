//! Where the omission marker goes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when a string does not name a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position '{input}' (expected start, middle or end)")]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

/// Placement of the omission marker in truncated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Marker first, trailing characters kept.
    Start,
    /// Marker between characters kept from both ends.
    Middle,
    /// Leading characters kept, marker last.
    #[default]
    End,
}

impl Position {
    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "middle" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(ParsePositionError {
                input: s.to_string(),
            }),
        }
    }
}

/// Accepts the same spellings as [`FromStr`], so `"Middle"` in a config file
/// reads the same as `"middle"`.
impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_default_is_end() {
        assert_eq!(Position::default(), Position::End);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Start.to_string(), "start");
        assert_eq!(Position::Middle.to_string(), "middle");
        assert_eq!(Position::End.to_string(), "end");
    }

    #[test]
    fn test_position_from_str_case_insensitive() {
        assert_eq!("start".parse::<Position>().unwrap(), Position::Start);
        assert_eq!("Middle".parse::<Position>().unwrap(), Position::Middle);
        assert_eq!(" END ".parse::<Position>().unwrap(), Position::End);
    }

    #[test]
    fn test_position_from_str_unknown() {
        let err = "center".parse::<Position>().unwrap_err();
        assert_eq!(err.input, "center");
        assert_eq!(
            err.to_string(),
            "unknown position 'center' (expected start, middle or end)"
        );
    }

    #[test]
    fn test_position_serialization() {
        assert_eq!(
            serde_json::to_string(&Position::Start).unwrap(),
            "\"start\""
        );
        assert_eq!(
            serde_json::to_string(&Position::Middle).unwrap(),
            "\"middle\""
        );
        assert_eq!(serde_json::to_string(&Position::End).unwrap(), "\"end\"");
    }

    #[test]
    fn test_position_deserialization() {
        assert_eq!(
            serde_json::from_str::<Position>("\"middle\"").unwrap(),
            Position::Middle
        );
        assert_eq!(
            serde_json::from_str::<Position>("\"Middle\"").unwrap(),
            Position::Middle
        );
        assert!(serde_json::from_str::<Position>("\"center\"").is_err());
    }
}
