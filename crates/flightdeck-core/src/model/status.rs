// ── Display status ──
//
// Maps the provider's free-form status code to the label shown to users.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-facing flight status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    Cancelled,
    Landed,
    /// `active` or `scheduled`.
    OnTime,
    /// Any other non-empty code, kept verbatim.
    Other(String),
    Unknown,
}

impl FlightStatus {
    /// Derive from a raw status code. Comparison is case-insensitive.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::Unknown;
        };
        match raw.to_lowercase().as_str() {
            "cancelled" => Self::Cancelled,
            "landed" => Self::Landed,
            "active" | "scheduled" => Self::OnTime,
            _ => Self::Other(raw.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Cancelled => "Cancelled",
            Self::Landed => "Landed",
            Self::OnTime => "On time",
            Self::Other(raw) => raw,
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a raw status code.
pub fn display_status(raw: Option<&str>) -> String {
    FlightStatus::from_raw(raw).label().to_owned()
}
