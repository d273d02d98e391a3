use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Countries the picker can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "CA", alias = "ca")]
    Ca,
    #[serde(rename = "CO", alias = "co")]
    Co,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown country code '{0}' (expected one of: CA, CO)")]
pub struct UnknownCountry(pub String);

impl CountryCode {
    /// Every selectable code, in picker order.
    pub const ALL: [CountryCode; 2] = [CountryCode::Ca, CountryCode::Co];

    /// Upper-case code sent to the lookup endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            CountryCode::Ca => "CA",
            CountryCode::Co => "CO",
        }
    }

    /// Label shown in the picker. "Columbia" is kept as the product spells it.
    pub fn label(self) -> &'static str {
        match self {
            CountryCode::Ca => "Canada",
            CountryCode::Co => "Columbia",
        }
    }

    /// Position in [`CountryCode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|code| *code == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
