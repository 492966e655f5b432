use rail_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "o" | "other" => Ok(Gender::Other),
            other => Err(CoreError::ValidationError(format!("unknown gender: {other}"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

/// The person travelling. `user_id` is the opaque account id of whoever booked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub user_id: String,
    pub name: Masked<String>,
    pub age: u8,
    pub gender: Gender,
}

impl Passenger {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, age: u8, gender: Gender) -> Self {
        Self {
            user_id: user_id.into(),
            name: Masked::new(name.into()),
            age,
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" male ".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn test_passenger_debug_hides_name() {
        let p = Passenger::new("user-1", "Anitha", 31, Gender::Female);
        let debug = format!("{:?}", p);
        assert!(!debug.contains("Anitha"));
        assert_eq!(p.name.expose(), "Anitha");
    }
}
