// ── Remote flight provider ──
//
// Read-only flight queries. Parameters are already normalized; the
// provider passes them through untouched and preserves result order.

use std::future::Future;

use flightdeck_api::AviationClient;

use crate::error::CoreError;
use crate::model::FlightRecord;

/// Result cap for number and route lookups.
pub const SEARCH_LIMIT: u32 = 5;
/// Result cap for airport departure and arrival feeds.
pub const FEED_LIMIT: u32 = 10;

/// Source of flight records. Zero records is a valid, non-error result.
pub trait FlightProvider: Send + Sync + 'static {
    fn by_number(
        &self,
        flight_number: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<FlightRecord>, CoreError>> + Send;

    fn by_route(
        &self,
        departure: &str,
        arrival: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<FlightRecord>, CoreError>> + Send;

    fn departures_from(
        &self,
        airport: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<FlightRecord>, CoreError>> + Send;

    fn arrivals_to(
        &self,
        airport: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<FlightRecord>, CoreError>> + Send;
}

fn into_records(
    result: Result<Vec<flightdeck_api::aviation::FlightData>, flightdeck_api::Error>,
) -> Result<Vec<FlightRecord>, CoreError> {
    result
        .map(|flights| flights.into_iter().map(FlightRecord::from).collect())
        .map_err(|e| CoreError::provider(&e))
}

impl FlightProvider for AviationClient {
    async fn by_number(
        &self,
        flight_number: &str,
        limit: u32,
    ) -> Result<Vec<FlightRecord>, CoreError> {
        into_records(self.flights_by_number(flight_number, limit).await)
    }

    async fn by_route(
        &self,
        departure: &str,
        arrival: &str,
        limit: u32,
    ) -> Result<Vec<FlightRecord>, CoreError> {
        into_records(self.flights_by_route(departure, arrival, limit).await)
    }

    async fn departures_from(
        &self,
        airport: &str,
        limit: u32,
    ) -> Result<Vec<FlightRecord>, CoreError> {
        into_records(AviationClient::departures_from(self, airport, limit).await)
    }

    async fn arrivals_to(&self, airport: &str, limit: u32) -> Result<Vec<FlightRecord>, CoreError> {
        into_records(AviationClient::arrivals_to(self, airport, limit).await)
    }
}
