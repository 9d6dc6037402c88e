// flightdeck-core: Reactive controllers over a flight data provider and a
// favourites store.
//
// Consumers build a `FlightDeck` from a `ClientConfig` (or wire their own
// `FlightProvider`/`FavouritesStore` implementations), call controller
// operations, and observe state through `StateStream`s.

pub mod config;
pub mod controller;
mod convert;
pub mod deck;
pub mod error;
pub mod identity;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod state;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ClientConfig;
pub use controller::{
    DEFAULT_BASE_AIRPORT, FavouritesController, FavouritesState, FeaturedController,
    FeaturedState, SearchController, SearchState, select_featured,
};
pub use deck::FlightDeck;
pub use error::CoreError;
pub use identity::{IdentityProvider, Session, UserId};
pub use model::{FlightLeg, FlightRecord, FlightStatus, SavedFlight, display_status};
pub use normalize::{normalize_flight_number, normalize_iata};
pub use provider::{FEED_LIMIT, FlightProvider, SEARCH_LIMIT};
pub use state::{StateStream, StateWatchStream};
pub use store::{DocumentFavourites, FavouritesStore};

// Transport types consumers need to build a `ClientConfig`.
pub use flightdeck_api::TlsMode;
