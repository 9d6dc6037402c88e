// ── Saved favourites ──

use serde::{Deserialize, Serialize};

use super::flight::FlightRecord;
use super::status::FlightStatus;
use crate::identity::UserId;

/// A flight persisted to a user's favourites.
///
/// A point-in-time copy of a [`FlightRecord`]. Only `status` changes after
/// creation (on refresh); `id` is assigned by the store and keys every
/// later operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedFlight {
    pub flight_number: String,
    pub airline_name: String,
    pub departure_airport: String,
    pub departure_iata: String,
    pub arrival_airport: String,
    pub arrival_iata: String,
    /// Last known raw status code.
    pub status: String,
    pub user_id: String,
    pub id: String,
}

impl SavedFlight {
    /// Snapshot a record for `owner`. Missing fields become empty strings.
    pub fn snapshot(record: &FlightRecord, owner: &UserId) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            flight_number: text(&record.flight_number),
            airline_name: text(&record.airline),
            departure_airport: text(&record.departure.airport),
            departure_iata: text(&record.departure.iata),
            arrival_airport: text(&record.arrival.airport),
            arrival_iata: text(&record.arrival.iata),
            status: text(&record.status),
            user_id: owner.as_str().to_owned(),
            id: String::new(),
        }
    }

    pub fn display_status(&self) -> FlightStatus {
        FlightStatus::from_raw(Some(&self.status))
    }
}
