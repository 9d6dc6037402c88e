// Flight query endpoints
//
// All four queries hit `GET /flights`; they differ only in the filter
// parameters. Codes are sent exactly as given.

use tracing::debug;

use super::client::AviationClient;
use super::models::FlightData;
use crate::error::Error;

impl AviationClient {
    /// Flights matching an IATA flight number.
    ///
    /// `GET /flights?flight_iata={number}&limit={limit}`
    pub async fn flights_by_number(
        &self,
        flight_iata: &str,
        limit: u32,
    ) -> Result<Vec<FlightData>, Error> {
        debug!(flight_iata, limit, "querying flights by number");
        self.get_flights(&[
            ("flight_iata", flight_iata.to_owned()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    /// Flights on a departure/arrival route.
    ///
    /// `GET /flights?dep_iata={dep}&arr_iata={arr}&limit={limit}`
    pub async fn flights_by_route(
        &self,
        dep_iata: &str,
        arr_iata: &str,
        limit: u32,
    ) -> Result<Vec<FlightData>, Error> {
        debug!(dep_iata, arr_iata, limit, "querying flights by route");
        self.get_flights(&[
            ("dep_iata", dep_iata.to_owned()),
            ("arr_iata", arr_iata.to_owned()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    /// Flights departing from an airport.
    ///
    /// `GET /flights?dep_iata={iata}&limit={limit}`
    pub async fn departures_from(
        &self,
        airport_iata: &str,
        limit: u32,
    ) -> Result<Vec<FlightData>, Error> {
        debug!(airport_iata, limit, "querying departures");
        self.get_flights(&[
            ("dep_iata", airport_iata.to_owned()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    /// Flights arriving at an airport.
    ///
    /// `GET /flights?arr_iata={iata}&limit={limit}`
    pub async fn arrivals_to(
        &self,
        airport_iata: &str,
        limit: u32,
    ) -> Result<Vec<FlightData>, Error> {
        debug!(airport_iata, limit, "querying arrivals");
        self.get_flights(&[
            ("arr_iata", airport_iata.to_owned()),
            ("limit", limit.to_string()),
        ])
        .await
    }
}
