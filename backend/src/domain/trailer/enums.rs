//! Closed trailer categories and their lenient parsers.
//!
//! Each category has a canonical wire form (`as_str`), a display label and two
//! parsers. `FromStr` (and `try_parse`) is strict after normalization, while
//! `parse` never fails and falls back to the category default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowercase, trim and replace each whitespace run with `separator`.
fn normalize(raw: &str, separator: Option<char>) -> String {
    let lowered = raw.trim().to_lowercase();
    match separator {
        Some(separator) => lowered
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(&separator.to_string()),
        None => lowered,
    }
}

/// Intended use and cargo class of a trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerType {
    #[default]
    DryVan,
    Reefer,
    Flatbed,
    Tanker,
    Lowboy,
    StepDeck,
    Other,
}

impl TrailerType {
    pub const ALL: [Self; 7] = [
        Self::DryVan,
        Self::Reefer,
        Self::Flatbed,
        Self::Tanker,
        Self::Lowboy,
        Self::StepDeck,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DryVan => "dry_van",
            Self::Reefer => "reefer",
            Self::Flatbed => "flatbed",
            Self::Tanker => "tanker",
            Self::Lowboy => "lowboy",
            Self::StepDeck => "step_deck",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DryVan => "Dry Van",
            Self::Reefer => "Reefer",
            Self::Flatbed => "Flatbed",
            Self::Tanker => "Tanker",
            Self::Lowboy => "Lowboy",
            Self::StepDeck => "Step Deck",
            Self::Other => "Other",
        }
    }

    /// Strict parse; `None` for unrecognised input.
    pub fn try_parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Lenient parse that falls back to [`TrailerType::DryVan`].
    ///
    /// # Examples
    /// ```
    /// use trailers::domain::trailer::TrailerType;
    ///
    /// assert_eq!(TrailerType::parse("Step Deck"), TrailerType::StepDeck);
    /// assert_eq!(TrailerType::parse("garbage"), TrailerType::DryVan);
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }
}

impl fmt::Display for TrailerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`TrailerType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrailerTypeError {
    pub input: String,
}

impl fmt::Display for ParseTrailerTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trailer type: {}", self.input)
    }
}

impl std::error::Error for ParseTrailerTypeError {}

impl FromStr for TrailerType {
    type Err = ParseTrailerTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value, Some('_')).as_str() {
            "dry_van" => Ok(Self::DryVan),
            "reefer" => Ok(Self::Reefer),
            "flatbed" => Ok(Self::Flatbed),
            "tanker" => Ok(Self::Tanker),
            "lowboy" => Ok(Self::Lowboy),
            "step_deck" => Ok(Self::StepDeck),
            "other" => Ok(Self::Other),
            _ => Err(ParseTrailerTypeError {
                input: value.to_owned(),
            }),
        }
    }
}

/// How the fleet holds a trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipType {
    #[default]
    Owned,
    Leased,
    Rented,
}

impl OwnershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::Leased => "leased",
            Self::Rented => "rented",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Leased => "Leased",
            Self::Rented => "Rented",
        }
    }

    pub fn requires_lease_end_date(&self) -> bool {
        matches!(self, Self::Leased)
    }

    pub fn requires_lease_document(&self) -> bool {
        matches!(self, Self::Leased)
    }

    pub fn try_parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Lenient parse that falls back to [`OwnershipType::Owned`].
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }
}

impl fmt::Display for OwnershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`OwnershipType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOwnershipTypeError {
    pub input: String,
}

impl fmt::Display for ParseOwnershipTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ownership type: {}", self.input)
    }
}

impl std::error::Error for ParseOwnershipTypeError {}

impl FromStr for OwnershipType {
    type Err = ParseOwnershipTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value, None).as_str() {
            "owned" => Ok(Self::Owned),
            "leased" => Ok(Self::Leased),
            "rented" => Ok(Self::Rented),
            _ => Err(ParseOwnershipTypeError {
                input: value.to_owned(),
            }),
        }
    }
}

/// Operational state of a trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailerStatus {
    #[default]
    Available,
    Assigned,
    Maintenance,
    OutOfService,
}

impl TrailerStatus {
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Assigned,
        Self::Maintenance,
        Self::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Assigned => "assigned",
            Self::Maintenance => "maintenance",
            Self::OutOfService => "out-of-service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::Maintenance => "Maintenance",
            Self::OutOfService => "Out of Service",
        }
    }

    /// Only available trailers may be attached to a truck.
    pub fn can_be_assigned(&self) -> bool {
        matches!(self, Self::Available)
    }

    pub fn requires_maintenance_attention(&self) -> bool {
        matches!(self, Self::Maintenance | Self::OutOfService)
    }

    pub fn try_parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Lenient parse that falls back to [`TrailerStatus::Available`].
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }
}

impl fmt::Display for TrailerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`TrailerStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrailerStatusError {
    pub input: String,
}

impl fmt::Display for ParseTrailerStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trailer status: {}", self.input)
    }
}

impl std::error::Error for ParseTrailerStatusError {}

impl FromStr for TrailerStatus {
    type Err = ParseTrailerStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value, Some('-')).as_str() {
            "available" => Ok(Self::Available),
            "assigned" => Ok(Self::Assigned),
            "maintenance" => Ok(Self::Maintenance),
            "out-of-service" => Ok(Self::OutOfService),
            _ => Err(ParseTrailerStatusError {
                input: value.to_owned(),
            }),
        }
    }
}
