// ── Flight records ──
//
// Transient, provider-sourced view of a single flight. Every field is
// optional; the accessors fall back to placeholder strings for display.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::status::FlightStatus;

pub const UNKNOWN_AIRPORT: &str = "Unknown Airport";
pub const UNKNOWN_AIRLINE: &str = "Unknown airline";
pub const UNKNOWN_NUMBER: &str = "Unknown number";

/// A flight as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Raw status code (`active`, `landed`, ...).
    pub status: Option<String>,
    pub airline: Option<String>,
    /// IATA flight number, e.g. `AC430`.
    pub flight_number: Option<String>,
    pub departure: FlightLeg,
    pub arrival: FlightLeg,
}

/// Departure or arrival side of a flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub airport: Option<String>,
    pub iata: Option<String>,
    /// ISO-8601 with offset, e.g. `2025-11-20T06:00:00+00:00`.
    pub scheduled: Option<String>,
    pub delay_minutes: Option<i64>,
}

impl FlightRecord {
    pub fn display_status(&self) -> FlightStatus {
        FlightStatus::from_raw(self.status.as_deref())
    }

    pub fn airline_name(&self) -> &str {
        non_blank(self.airline.as_deref()).unwrap_or(UNKNOWN_AIRLINE)
    }

    pub fn flight_number_label(&self) -> &str {
        non_blank(self.flight_number.as_deref()).unwrap_or(UNKNOWN_NUMBER)
    }
}

impl FlightLeg {
    pub fn airport_name(&self) -> &str {
        non_blank(self.airport.as_deref()).unwrap_or(UNKNOWN_AIRPORT)
    }

    pub fn iata_code(&self) -> &str {
        self.iata.as_deref().unwrap_or_default()
    }

    /// Scheduled time as `h:mm AM/PM` in the timestamp's own offset.
    ///
    /// Empty when the timestamp is missing or unparsable.
    pub fn scheduled_time(&self) -> String {
        self.scheduled
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.format("%-I:%M %p").to_string())
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
