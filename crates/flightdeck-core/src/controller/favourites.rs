// ── Saved favourites ──
//
// Load, delete, and status refresh for the signed-in user's favourites.
// The in-memory list mirrors the store after every successful mutation.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::DEFAULT_REFRESH_CONCURRENCY;
use super::messages::{
    DELETE_FAILED, DELETE_MISSING_ID, DELETE_REQUIRES_SIGN_IN, LOAD_FAILED, LOAD_REQUIRES_SIGN_IN,
};
use crate::error::CoreError;
use crate::identity::IdentityProvider;
use crate::model::SavedFlight;
use crate::provider::{FlightProvider, SEARCH_LIMIT};
use crate::state::{Busy, StateStream};
use crate::store::FavouritesStore;

/// Outcome of one status lookup during a refresh.
type StatusLookup = Result<Option<String>, CoreError>;

/// Observable state of a [`FavouritesController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavouritesState {
    pub favourites: Vec<SavedFlight>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_refreshing: bool,
}

/// The signed-in user's saved flights.
pub struct FavouritesController<P, S> {
    inner: Arc<FavouritesInner<P, S>>,
}

struct FavouritesInner<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    identity: Arc<dyn IdentityProvider>,
    refresh_concurrency: usize,
    state: watch::Sender<FavouritesState>,
}

impl<P, S> Clone for FavouritesController<P, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: FlightProvider, S: FavouritesStore> FavouritesController<P, S> {
    pub fn new(provider: Arc<P>, store: Arc<S>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self::with_refresh_concurrency(provider, store, identity, DEFAULT_REFRESH_CONCURRENCY)
    }

    /// `refresh_concurrency` bounds the status lookups in flight at once.
    pub fn with_refresh_concurrency(
        provider: Arc<P>,
        store: Arc<S>,
        identity: Arc<dyn IdentityProvider>,
        refresh_concurrency: usize,
    ) -> Self {
        Self {
            inner: Arc::new(FavouritesInner {
                provider,
                store,
                identity,
                refresh_concurrency: refresh_concurrency.max(1),
                state: watch::Sender::new(FavouritesState::default()),
            }),
        }
    }

    pub fn state(&self) -> FavouritesState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<FavouritesState> {
        StateStream::new(self.inner.state.subscribe())
    }

    // ── Load ─────────────────────────────────────────────────────────

    /// Replace the list with the store's contents for the current user.
    pub async fn load(&self) {
        let owner = self.inner.identity.current_user();
        let busy = Busy::begin(
            &self.inner.state,
            |s| {
                s.is_loading = true;
                s.error = None;
            },
            |s| s.is_loading = false,
        );

        match self.inner.store.list(owner.as_ref()).await {
            Ok(favourites) => {
                debug!(count = favourites.len(), "favourites loaded");
                busy.finish(|s| s.favourites = favourites);
            }
            Err(e) => {
                warn!(error = %e, "failed to load favourites");
                let message = load_error_message(&e);
                busy.finish(|s| {
                    s.favourites.clear();
                    s.error = Some(message);
                });
            }
        }
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Delete `target` from the store, then drop exactly that entry.
    pub async fn delete(&self, target: &SavedFlight) {
        let owner = self.inner.identity.current_user();

        match self.inner.store.delete(&target.id, owner.as_ref()).await {
            Ok(()) => {
                debug!(id = %target.id, "favourite removed");
                self.inner
                    .state
                    .send_modify(|s| s.favourites.retain(|f| f.id != target.id));
            }
            Err(e) => {
                warn!(error = %e, id = %target.id, "failed to remove favourite");
                let message = delete_error_message(&e);
                self.inner.state.send_modify(|s| s.error = Some(message));
            }
        }
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Look up the latest status of every favourite and publish the merged
    /// list in one update. Failed lookups leave their entry untouched;
    /// nothing is written back to the store.
    pub async fn refresh_status(&self) {
        let snapshot = self.inner.state.borrow().favourites.clone();
        if snapshot.is_empty() {
            debug!("no favourites to refresh");
            return;
        }

        let busy = Busy::begin(
            &self.inner.state,
            |s| {
                s.is_refreshing = true;
                s.error = None;
            },
            |s| s.is_refreshing = false,
        );

        let provider = self.inner.provider.as_ref();
        let numbers: Vec<String> = snapshot.iter().map(|s| s.flight_number.clone()).collect();
        let lookups: Vec<StatusLookup> = stream::iter(numbers)
            .map(|number| async move { latest_status(provider, &number).await })
            .buffered(self.inner.refresh_concurrency)
            .collect()
            .await;

        let failed = lookups.iter().filter(|l| l.is_err()).count();
        let merged = merge_statuses(snapshot, lookups);
        info!(total = merged.len(), failed, "favourites status refresh complete");
        busy.finish(|s| s.favourites = merged);
    }
}

async fn latest_status<P: FlightProvider>(provider: &P, flight_number: &str) -> StatusLookup {
    if flight_number.trim().is_empty() {
        return Ok(None);
    }
    let records = provider.by_number(flight_number, SEARCH_LIMIT).await?;
    Ok(records.into_iter().next().and_then(|r| r.status))
}

/// Apply lookups to favourites position by position.
///
/// Only a non-empty status overwrites; the result always has the same
/// length and order as `favourites`.
fn merge_statuses(favourites: Vec<SavedFlight>, lookups: Vec<StatusLookup>) -> Vec<SavedFlight> {
    let mut lookups = lookups.into_iter();
    favourites
        .into_iter()
        .map(|mut saved| {
            match lookups.next() {
                Some(Ok(Some(status))) if !status.trim().is_empty() => saved.status = status,
                Some(Err(e)) => {
                    warn!(
                        id = %saved.id,
                        flight_number = %saved.flight_number,
                        error = %e,
                        "status lookup failed"
                    );
                }
                _ => {}
            }
            saved
        })
        .collect()
}

fn load_error_message(err: &CoreError) -> String {
    match err {
        CoreError::NotAuthenticated => LOAD_REQUIRES_SIGN_IN.to_owned(),
        other => message_or(other, LOAD_FAILED),
    }
}

fn delete_error_message(err: &CoreError) -> String {
    match err {
        CoreError::NotAuthenticated => DELETE_REQUIRES_SIGN_IN.to_owned(),
        CoreError::InvalidReference { .. } => DELETE_MISSING_ID.to_owned(),
        other => message_or(other, DELETE_FAILED),
    }
}

fn message_or(err: &CoreError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}
