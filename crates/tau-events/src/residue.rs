//! Residue Labels
//!
//! A residue is one position in the protein sequence, written as the
//! single-letter amino acid code followed by the position.
//!
//! # Example
//!
//! ```
//! use tau_events::Residue;
//!
//! let site: Residue = "S231".parse().unwrap();
//! assert_eq!(site, Residue::serine(231));
//! assert_eq!(site.to_string(), "S231");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Aspartate 421, the caspase cleavage site used when no other site is given.
pub const DEFAULT_TRUNCATION_SITE: Residue = Residue {
    amino: 'D',
    position: 421,
};

/// A labeled residue such as `S231` or `D421`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Residue {
    amino: char,
    position: u16,
}

impl Residue {
    /// Creates a residue label. Returns `None` unless `amino` is an
    /// uppercase ASCII letter.
    pub fn new(amino: char, position: u16) -> Option<Self> {
        amino
            .is_ascii_uppercase()
            .then_some(Self { amino, position })
    }

    /// Serine at the given position, the only phosphorylation target modeled.
    pub fn serine(position: u16) -> Self {
        Self {
            amino: 'S',
            position,
        }
    }

    pub fn amino(&self) -> char {
        self.amino
    }

    pub fn position(&self) -> u16 {
        self.position
    }
}

impl Default for Residue {
    fn default() -> Self {
        DEFAULT_TRUNCATION_SITE
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amino, self.position)
    }
}

/// Error type for parsing a Residue from a string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResidueError {
    Empty,
    InvalidAmino(String),
    InvalidPosition(String),
}

impl fmt::Display for ParseResidueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResidueError::Empty => write!(f, "empty residue label"),
            ParseResidueError::InvalidAmino(s) => {
                write!(f, "invalid residue label: '{}', expected an uppercase amino acid code", s)
            }
            ParseResidueError::InvalidPosition(s) => {
                write!(f, "invalid residue position in '{}'", s)
            }
        }
    }
}

impl std::error::Error for ParseResidueError {}

impl FromStr for Residue {
    type Err = ParseResidueError;

    /// Parses a label like "S231".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let amino = chars.next().ok_or(ParseResidueError::Empty)?;
        if !amino.is_ascii_uppercase() {
            return Err(ParseResidueError::InvalidAmino(s.to_string()));
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseResidueError::InvalidPosition(s.to_string()));
        }
        let position = digits
            .parse::<u16>()
            .map_err(|_| ParseResidueError::InvalidPosition(s.to_string()))?;

        Ok(Residue { amino, position })
    }
}

// Serialized as the label string
impl Serialize for Residue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Residue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
