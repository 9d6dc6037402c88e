// In-memory provider and store used by controller tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::CoreError;
use crate::identity::UserId;
use crate::model::{FlightLeg, FlightRecord, SavedFlight};
use crate::provider::FlightProvider;
use crate::store::{FavouritesStore, require_owner, validate_reference};

type Lookup = Result<Vec<FlightRecord>, CoreError>;

pub(crate) fn record(number: &str, status: Option<&str>) -> FlightRecord {
    FlightRecord {
        status: status.map(str::to_owned),
        airline: Some("Air Canada".into()),
        flight_number: Some(number.into()),
        departure: FlightLeg {
            airport: Some("Winnipeg".into()),
            iata: Some("YWG".into()),
            ..FlightLeg::default()
        },
        arrival: FlightLeg {
            airport: Some("Toronto Pearson".into()),
            iata: Some("YYZ".into()),
            ..FlightLeg::default()
        },
    }
}

pub(crate) fn provider_down() -> CoreError {
    CoreError::Provider {
        message: "connection refused".into(),
    }
}

// ── Provider ─────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FakeProvider {
    numbers: Mutex<HashMap<String, Lookup>>,
    routes: Mutex<HashMap<(String, String), Lookup>>,
    departures: Mutex<Option<Lookup>>,
    arrivals: Mutex<Option<Lookup>>,
    delays: Mutex<HashMap<String, Duration>>,
    feed_delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub(crate) fn with_number(self, number: &str, result: Lookup) -> Self {
        self.numbers.lock().unwrap().insert(number.into(), result);
        self
    }

    pub(crate) fn with_route(self, dep: &str, arr: &str, result: Lookup) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((dep.into(), arr.into()), result);
        self
    }

    pub(crate) fn with_feeds(self, departures: Lookup, arrivals: Lookup) -> Self {
        *self.departures.lock().unwrap() = Some(departures);
        *self.arrivals.lock().unwrap() = Some(arrivals);
        self
    }

    /// Delay by-number answers for `number`.
    pub(crate) fn with_delay(self, number: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(number.into(), delay);
        self
    }

    /// Delay both airport feeds.
    pub(crate) fn with_feed_delay(self, delay: Duration) -> Self {
        *self.feed_delay.lock().unwrap() = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn feed_pause(&self) {
        let delay = *self.feed_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl FlightProvider for FakeProvider {
    async fn by_number(&self, flight_number: &str, limit: u32) -> Lookup {
        self.log(format!("number {flight_number} limit {limit}"));
        let delay = self.delays.lock().unwrap().get(flight_number).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let answer = self.numbers.lock().unwrap().get(flight_number).cloned();
        answer.unwrap_or(Ok(Vec::new()))
    }

    async fn by_route(&self, departure: &str, arrival: &str, limit: u32) -> Lookup {
        self.log(format!("route {departure}-{arrival} limit {limit}"));
        let key = (departure.to_owned(), arrival.to_owned());
        let answer = self.routes.lock().unwrap().get(&key).cloned();
        answer.unwrap_or(Ok(Vec::new()))
    }

    async fn departures_from(&self, airport: &str, limit: u32) -> Lookup {
        self.log(format!("departures {airport} limit {limit}"));
        self.feed_pause().await;
        let answer = self.departures.lock().unwrap().clone();
        answer.unwrap_or(Ok(Vec::new()))
    }

    async fn arrivals_to(&self, airport: &str, limit: u32) -> Lookup {
        self.log(format!("arrivals {airport} limit {limit}"));
        self.feed_pause().await;
        let answer = self.arrivals.lock().unwrap().clone();
        answer.unwrap_or(Ok(Vec::new()))
    }
}

// ── Store ────────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FakeStore {
    items: Mutex<Vec<SavedFlight>>,
    failure: Mutex<Option<CoreError>>,
    delay: Mutex<Option<Duration>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn with_items(items: Vec<SavedFlight>) -> Self {
        let store = Self::default();
        *store.items.lock().unwrap() = items;
        store
    }

    pub(crate) fn failing(self, err: CoreError) -> Self {
        *self.failure.lock().unwrap() = Some(err);
        self
    }

    /// Delay every list call.
    pub(crate) fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    pub(crate) fn items(&self) -> Vec<SavedFlight> {
        self.items.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, owner: Option<&UserId>) -> Result<(), CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        require_owner(owner)?;
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl FavouritesStore for FakeStore {
    async fn add(&self, flight: &SavedFlight, owner: Option<&UserId>) -> Result<String, CoreError> {
        self.enter(owner)?;
        let id = format!("fav-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.items.lock().unwrap().push(SavedFlight {
            id: id.clone(),
            ..flight.clone()
        });
        Ok(id)
    }

    async fn list(&self, owner: Option<&UserId>) -> Result<Vec<SavedFlight>, CoreError> {
        self.enter(owner)?;
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.items())
    }

    async fn delete(&self, id: &str, owner: Option<&UserId>) -> Result<(), CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        require_owner(owner)?;
        validate_reference(id)?;
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.items.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }
}

pub(crate) fn saved(id: &str, number: &str, status: &str) -> SavedFlight {
    SavedFlight {
        flight_number: number.into(),
        airline_name: "Air Canada".into(),
        departure_iata: "YWG".into(),
        arrival_iata: "YYZ".into(),
        status: status.into(),
        user_id: "u1".into(),
        id: id.into(),
        ..SavedFlight::default()
    }
}
