// ── Controllers ──
//
// One controller per screen-level feature. Each owns its observable state
// and exposes async operations as the only mutators; every failure is
// turned into a message in state, never returned to the caller.

mod favourites;
mod featured;
pub mod messages;
mod search;

#[cfg(test)]
mod fakes;

pub use favourites::{FavouritesController, FavouritesState};
pub use featured::{DEFAULT_BASE_AIRPORT, FeaturedController, FeaturedState, select_featured};
pub use search::{SearchController, SearchState};

/// Default number of status lookups in flight during a refresh.
pub const DEFAULT_REFRESH_CONCURRENCY: usize = 4;
