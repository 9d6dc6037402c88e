// ── Flight search ──
//
// On-demand lookup by flight number or by route, plus saving a result to
// the signed-in user's favourites.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::messages::{
    NUMBER_SEARCH_FAILED, ROUTE_SEARCH_FAILED, SAVE_REQUIRES_SIGN_IN, SAVED, no_flights_for_number,
    no_flights_for_route, save_failed,
};
use crate::error::CoreError;
use crate::identity::IdentityProvider;
use crate::model::{FlightRecord, SavedFlight};
use crate::normalize::{normalize_flight_number, normalize_iata};
use crate::provider::{FlightProvider, SEARCH_LIMIT};
use crate::state::{Busy, StateStream};
use crate::store::FavouritesStore;

/// Observable state of a [`SearchController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub results: Vec<FlightRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Outcome of the last save, until cleared.
    pub save_message: Option<String>,
}

/// Flight search and save-to-favourites.
///
/// Cheaply cloneable via `Arc`; clones share state.
pub struct SearchController<P, S> {
    inner: Arc<SearchInner<P, S>>,
}

struct SearchInner<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    identity: Arc<dyn IdentityProvider>,
    state: watch::Sender<SearchState>,
}

impl<P, S> Clone for SearchController<P, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: FlightProvider, S: FavouritesStore> SearchController<P, S> {
    pub fn new(provider: Arc<P>, store: Arc<S>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            inner: Arc::new(SearchInner {
                provider,
                store,
                identity,
                state: watch::Sender::new(SearchState::default()),
            }),
        }
    }

    // ── State access ─────────────────────────────────────────────────

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<SearchState> {
        StateStream::new(self.inner.state.subscribe())
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Search by flight number. Whitespace is stripped and the number
    /// upper-cased before querying.
    pub async fn search_by_number(&self, raw: &str) {
        let number = normalize_flight_number(raw);
        debug!(flight_number = %number, "searching by flight number");

        let busy = self.begin_search();
        let outcome = self.inner.provider.by_number(&number, SEARCH_LIMIT).await;
        settle(
            busy,
            outcome,
            no_flights_for_number(&number),
            NUMBER_SEARCH_FAILED,
        );
    }

    /// Search by departure and arrival airport codes.
    pub async fn search_by_route(&self, departure: &str, arrival: &str) {
        let departure = normalize_iata(departure);
        let arrival = normalize_iata(arrival);
        debug!(%departure, %arrival, "searching by route");

        let busy = self.begin_search();
        let outcome = self
            .inner
            .provider
            .by_route(&departure, &arrival, SEARCH_LIMIT)
            .await;
        settle(
            busy,
            outcome,
            no_flights_for_route(&departure, &arrival),
            ROUTE_SEARCH_FAILED,
        );
    }

    /// Save a snapshot of `record` for the signed-in user.
    ///
    /// The outcome lands in `save_message`; without a signed-in user the
    /// store is never contacted.
    pub async fn save_to_favourites(&self, record: &FlightRecord) {
        let Some(owner) = self.inner.identity.current_user() else {
            debug!("save attempted without a signed-in user");
            self.set_save_message(SAVE_REQUIRES_SIGN_IN.to_owned());
            return;
        };

        let snapshot = SavedFlight::snapshot(record, &owner);
        let message = match self.inner.store.add(&snapshot, Some(&owner)).await {
            Ok(id) => {
                debug!(%id, flight_number = %snapshot.flight_number, "saved to favourites");
                SAVED.to_owned()
            }
            Err(CoreError::NotAuthenticated) => SAVE_REQUIRES_SIGN_IN.to_owned(),
            Err(e) => {
                warn!(error = %e, "failed to save favourite");
                save_failed(&e.to_string())
            }
        };
        self.set_save_message(message);
    }

    pub fn clear_save_message(&self) {
        self.inner.state.send_modify(|s| s.save_message = None);
    }

    // ── Internals ────────────────────────────────────────────────────

    fn begin_search(&self) -> Busy<'_, SearchState> {
        Busy::begin(
            &self.inner.state,
            |s| {
                s.is_loading = true;
                s.error = None;
                s.results.clear();
            },
            |s| s.is_loading = false,
        )
    }

    fn set_save_message(&self, message: String) {
        self.inner
            .state
            .send_modify(|s| s.save_message = Some(message));
    }
}

fn settle(
    busy: Busy<'_, SearchState>,
    outcome: Result<Vec<FlightRecord>, CoreError>,
    empty_message: String,
    failure_message: &str,
) {
    match outcome {
        Ok(results) if results.is_empty() => {
            debug!("search returned no flights");
            busy.finish(|s| s.error = Some(empty_message));
        }
        Ok(results) => {
            debug!(count = results.len(), "search complete");
            busy.finish(|s| s.results = results);
        }
        Err(e) => {
            warn!(error = %e, "flight search failed");
            busy.finish(|s| s.error = Some(failure_message.to_owned()));
        }
    }
}
