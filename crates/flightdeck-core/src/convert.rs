// ── Wire → domain conversions ──
//
// Provider payloads become `FlightRecord`s; favourites round-trip through
// store documents with camelCase string fields.

use flightdeck_api::Document;
use flightdeck_api::aviation::{AirportInfo, FlightData};

use crate::model::{FlightLeg, FlightRecord, SavedFlight};

// ── Flight records ───────────────────────────────────────────────────

impl From<AirportInfo> for FlightLeg {
    fn from(a: AirportInfo) -> Self {
        Self {
            airport: a.airport,
            iata: a.iata,
            scheduled: a.scheduled,
            delay_minutes: a.delay,
        }
    }
}

impl From<FlightData> for FlightRecord {
    fn from(f: FlightData) -> Self {
        // `flight.number` holds only the numeric part; prefer the IATA form.
        let flight_number = f.flight.and_then(|info| info.iata.or(info.number));
        Self {
            status: f.flight_status,
            airline: f.airline.and_then(|a| a.name),
            flight_number,
            departure: f.departure.map(FlightLeg::from).unwrap_or_default(),
            arrival: f.arrival.map(FlightLeg::from).unwrap_or_default(),
        }
    }
}

// ── Favourites documents ─────────────────────────────────────────────

const FLIGHT_NUMBER: &str = "flightNumber";
const AIRLINE_NAME: &str = "airlineName";
const DEPARTURE_AIRPORT: &str = "departureAirport";
const DEPARTURE_IATA: &str = "departureIata";
const ARRIVAL_AIRPORT: &str = "arrivalAirport";
const ARRIVAL_IATA: &str = "arrivalIata";
const STATUS: &str = "status";
const USER_ID: &str = "userId";

/// Store fields for a favourite. The id is not a field; it lives in the
/// document name.
pub(crate) fn saved_to_document(saved: &SavedFlight) -> Document {
    Document::default()
        .with_string(FLIGHT_NUMBER, &saved.flight_number)
        .with_string(AIRLINE_NAME, &saved.airline_name)
        .with_string(DEPARTURE_AIRPORT, &saved.departure_airport)
        .with_string(DEPARTURE_IATA, &saved.departure_iata)
        .with_string(ARRIVAL_AIRPORT, &saved.arrival_airport)
        .with_string(ARRIVAL_IATA, &saved.arrival_iata)
        .with_string(STATUS, &saved.status)
        .with_string(USER_ID, &saved.user_id)
}

pub(crate) fn document_to_saved(doc: &Document) -> SavedFlight {
    let text = |key: &str| doc.string_field(key).unwrap_or_default().to_owned();
    SavedFlight {
        flight_number: text(FLIGHT_NUMBER),
        airline_name: text(AIRLINE_NAME),
        departure_airport: text(DEPARTURE_AIRPORT),
        departure_iata: text(DEPARTURE_IATA),
        arrival_airport: text(ARRIVAL_AIRPORT),
        arrival_iata: text(ARRIVAL_IATA),
        status: text(STATUS),
        user_id: text(USER_ID),
        id: doc.id().to_owned(),
    }
}
