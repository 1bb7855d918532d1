//! Core types for the capitals subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryKey {
    Us,
    India,
    Uk,
}

impl CountryKey {
    pub const ALL: [CountryKey; 3] = [Self::Us, Self::India, Self::Uk];

    /// Parse a country key case-insensitively. Unknown keys yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" => Some(Self::Us),
            "india" => Some(Self::India),
            "uk" => Some(Self::Uk),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::India => "india",
            Self::Uk => "uk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Us => "United States",
            Self::India => "India",
            Self::Uk => "United Kingdom",
        }
    }
}

impl fmt::Display for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown country '{}'. Use us, india, or uk.", s))
    }
}

/// A region entry in the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub capital: &'static str,
}

/// The result of a region lookup: the canonical region name and its capital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalMatch {
    #[serde(rename = "state")]
    pub region: String,
    pub capital: String,
}

impl From<&Region> for CapitalMatch {
    fn from(r: &Region) -> Self {
        Self {
            region: r.name.to_string(),
            capital: r.capital.to_string(),
        }
    }
}
