use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Physical position of a confirmed seat within its bay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatPosition {
    Window,
    Middle,
    Aisle,
}

impl SeatPosition {
    /// Order in which positions are laid out along a bay
    pub const CYCLE: [SeatPosition; 3] = [SeatPosition::Window, SeatPosition::Middle, SeatPosition::Aisle];

    pub fn code(self) -> char {
        match self {
            SeatPosition::Window => 'W',
            SeatPosition::Middle => 'M',
            SeatPosition::Aisle => 'A',
        }
    }
}

/// Passenger's requested seat position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SeatPreference {
    Window,
    Middle,
    Aisle,
    #[default]
    NoPreference,
}

impl SeatPreference {
    pub fn position(self) -> Option<SeatPosition> {
        match self {
            SeatPreference::Window => Some(SeatPosition::Window),
            SeatPreference::Middle => Some(SeatPosition::Middle),
            SeatPreference::Aisle => Some(SeatPosition::Aisle),
            SeatPreference::NoPreference => None,
        }
    }

    /// Whether a seat at `position` satisfies this preference
    pub fn accepts(self, position: SeatPosition) -> bool {
        self.position().map_or(true, |wanted| wanted == position)
    }

    pub fn is_specific(self) -> bool {
        self != SeatPreference::NoPreference
    }
}

impl FromStr for SeatPreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "window" => Ok(SeatPreference::Window),
            "m" | "middle" => Ok(SeatPreference::Middle),
            "a" | "aisle" => Ok(SeatPreference::Aisle),
            "" | "none" | "any" | "no-preference" | "no preference" => Ok(SeatPreference::NoPreference),
            other => Err(CoreError::ValidationError(format!("unknown seat preference: {other}"))),
        }
    }
}

impl fmt::Display for SeatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeatPreference::Window => "window",
            SeatPreference::Middle => "middle",
            SeatPreference::Aisle => "aisle",
            SeatPreference::NoPreference => "no-preference",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parsing() {
        assert_eq!("Window".parse::<SeatPreference>().unwrap(), SeatPreference::Window);
        assert_eq!(" a ".parse::<SeatPreference>().unwrap(), SeatPreference::Aisle);
        assert_eq!("No-Preference".parse::<SeatPreference>().unwrap(), SeatPreference::NoPreference);
        assert_eq!("".parse::<SeatPreference>().unwrap(), SeatPreference::NoPreference);
        assert!("upper berth".parse::<SeatPreference>().is_err());
    }

    #[test]
    fn test_preference_accepts() {
        assert!(SeatPreference::Window.accepts(SeatPosition::Window));
        assert!(!SeatPreference::Window.accepts(SeatPosition::Aisle));
        for position in SeatPosition::CYCLE {
            assert!(SeatPreference::NoPreference.accepts(position));
        }
    }

    #[test]
    fn test_preference_serde_names() {
        let json = serde_json::to_string(&SeatPreference::NoPreference).unwrap();
        assert_eq!(json, "\"no-preference\"");
    }
}
