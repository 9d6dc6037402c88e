// ── Featured flights ──
//
// A fixed selection from one base airport: the first two departures,
// then the first arrival.

use std::sync::Arc;

use futures_util::future::try_join;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::messages::FEATURED_FAILED;
use crate::model::FlightRecord;
use crate::normalize::normalize_iata;
use crate::provider::{FEED_LIMIT, FlightProvider};
use crate::state::{Busy, StateStream};

pub const DEFAULT_BASE_AIRPORT: &str = "YWG";

/// Observable state of a [`FeaturedController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedState {
    pub featured: Vec<FlightRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Featured flights for a base airport.
pub struct FeaturedController<P> {
    inner: Arc<FeaturedInner<P>>,
}

struct FeaturedInner<P> {
    provider: Arc<P>,
    base_airport: String,
    state: watch::Sender<FeaturedState>,
}

impl<P> Clone for FeaturedController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: FlightProvider> FeaturedController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_base_airport(provider, DEFAULT_BASE_AIRPORT)
    }

    pub fn with_base_airport(provider: Arc<P>, base_airport: &str) -> Self {
        Self {
            inner: Arc::new(FeaturedInner {
                provider,
                base_airport: normalize_iata(base_airport),
                state: watch::Sender::new(FeaturedState::default()),
            }),
        }
    }

    pub fn base_airport(&self) -> &str {
        &self.inner.base_airport
    }

    pub fn state(&self) -> FeaturedState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<FeaturedState> {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Query departures and arrivals for the base airport and publish
    /// the selection. Either query failing discards both.
    pub async fn load_featured(&self) {
        let airport = self.inner.base_airport.as_str();
        debug!(%airport, "loading featured flights");

        let busy = Busy::begin(
            &self.inner.state,
            |s| {
                s.is_loading = true;
                s.error = None;
                s.featured.clear();
            },
            |s| s.is_loading = false,
        );

        let provider = &self.inner.provider;
        let outcome = try_join(
            provider.departures_from(airport, FEED_LIMIT),
            provider.arrivals_to(airport, FEED_LIMIT),
        )
        .await;

        match outcome {
            Ok((departures, arrivals)) => {
                let featured = select_featured(departures, arrivals);
                debug!(count = featured.len(), "featured flights loaded");
                busy.finish(|s| s.featured = featured);
            }
            Err(e) => {
                warn!(error = %e, %airport, "failed to load featured flights");
                busy.finish(|s| {
                    s.featured.clear();
                    s.error = Some(FEATURED_FAILED.to_owned());
                });
            }
        }
    }
}

/// First two departures followed by the first arrival, if any.
pub fn select_featured(
    departures: Vec<FlightRecord>,
    arrivals: Vec<FlightRecord>,
) -> Vec<FlightRecord> {
    departures
        .into_iter()
        .take(2)
        .chain(arrivals.into_iter().take(1))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controller::fakes::{FakeProvider, provider_down, record};

    fn flights(prefix: &str, n: usize) -> Vec<FlightRecord> {
        (0..n).map(|i| record(&format!("{prefix}{i}"), None)).collect()
    }

    fn numbers(records: &[FlightRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.flight_number.clone().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn selects_two_departures_then_one_arrival() {
        let provider = Arc::new(
            FakeProvider::default().with_feeds(Ok(flights("DEP", 5)), Ok(flights("ARR", 3))),
        );
        let ctl = FeaturedController::new(Arc::clone(&provider));

        ctl.load_featured().await;

        let state = ctl.state();
        assert_eq!(numbers(&state.featured), ["DEP0", "DEP1", "ARR0"]);
        assert_eq!(state.error, None);
        assert!(!state.is_loading);

        let mut calls = provider.calls();
        calls.sort();
        assert_eq!(calls, ["arrivals YWG limit 10", "departures YWG limit 10"]);
    }

    #[tokio::test(start_paused = true)]
    async fn loading_brackets_both_feeds() {
        let provider = FakeProvider::default()
            .with_feeds(Ok(flights("DEP", 3)), Ok(flights("ARR", 2)))
            .with_feed_delay(Duration::from_millis(50));
        let provider = Arc::new(provider);
        let ctl = FeaturedController::new(Arc::clone(&provider));
        let mut updates = ctl.subscribe();

        let load = ctl.clone();
        let task = tokio::spawn(async move { load.load_featured().await });

        let mut seen = Vec::new();
        while let Some(state) = updates.changed().await {
            seen.push((state.is_loading, state.featured.len()));
            if !state.is_loading {
                break;
            }
        }
        task.await.unwrap();

        assert_eq!(seen, [(true, 0), (false, 3)]);
        assert_eq!(provider.calls().len(), 2);
    }

    #[test]
    fn selection_with_short_feeds() {
        assert_eq!(numbers(&select_featured(flights("DEP", 1), Vec::new())), ["DEP0"]);
        assert_eq!(numbers(&select_featured(Vec::new(), flights("ARR", 2))), ["ARR0"]);
        assert!(select_featured(Vec::new(), Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn either_failure_discards_everything() {
        let provider =
            FakeProvider::default().with_feeds(Ok(flights("DEP", 5)), Err(provider_down()));
        let ctl = FeaturedController::new(Arc::new(provider));

        ctl.load_featured().await;

        let state = ctl.state();
        assert!(state.featured.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to load Featured Flights."));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn reload_clears_previous_error() {
        let ok = Arc::new(
            FakeProvider::default().with_feeds(Ok(flights("DEP", 2)), Ok(flights("ARR", 1))),
        );
        let ctl = FeaturedController::with_base_airport(ok, " yul ");
        assert_eq!(ctl.base_airport(), "YUL");

        ctl.inner
            .state
            .send_modify(|s| s.error = Some("stale".into()));
        ctl.load_featured().await;

        assert_eq!(ctl.state().error, None);
        assert_eq!(ctl.state().featured.len(), 3);
    }
}
