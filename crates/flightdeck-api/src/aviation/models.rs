// Wire types for the Aviationstack `flights` endpoint.
//
// Every field is optional: the provider omits whatever it does not know,
// and `data` itself can be null on an otherwise successful response.

use serde::{Deserialize, Serialize};

/// The `{ data, error }` envelope wrapping every response.
#[derive(Debug, Deserialize)]
pub struct FlightsResponse {
    #[serde(default)]
    pub data: Option<Vec<FlightData>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

/// Error body returned in place of `data` (often with HTTP 200).
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A single flight entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightData {
    /// Raw status, e.g. `active`, `landed`, `cancelled`, `scheduled`.
    #[serde(default)]
    pub flight_status: Option<String>,
    #[serde(default)]
    pub airline: Option<Airline>,
    #[serde(default)]
    pub flight: Option<FlightInfo>,
    #[serde(default)]
    pub departure: Option<AirportInfo>,
    #[serde(default)]
    pub arrival: Option<AirportInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    /// IATA flight number, e.g. `AC430`.
    #[serde(default)]
    pub iata: Option<String>,
    /// Numeric part only, e.g. `430`.
    #[serde(default)]
    pub number: Option<String>,
}

/// Departure or arrival leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportInfo {
    #[serde(default)]
    pub airport: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    /// ISO-8601 with offset, e.g. `2025-11-20T06:00:00+00:00`.
    #[serde(default)]
    pub scheduled: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub delay: Option<i64>,
}
