use std::{fmt, str::FromStr};

use serde::{de::Error as DeError, Deserialize, Deserializer};
use thiserror::Error;

/// The letter grade of a play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Grade {
    /// Silver SS
    XH,
    /// SS
    X,
    /// Silver S
    SH,
    S,
    A,
    B,
    C,
    D,
    /// Failed
    F,
}

impl Grade {
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::F)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XH => "XH",
            Self::X => "X",
            Self::SH => "SH",
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown grade `{0}`")]
pub struct ParseGradeError(pub String);

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grade = match s.trim().to_ascii_uppercase().as_str() {
            "XH" => Self::XH,
            "X" | "SS" => Self::X,
            "SH" => Self::SH,
            "S" => Self::S,
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "F" => Self::F,
            _ => return Err(ParseGradeError(s.to_owned())),
        };

        Ok(grade)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;

        s.parse().map_err(D::Error::custom)
    }
}
