// User-facing messages published through controller state.

// ── Search ───────────────────────────────────────────────────────────
pub const NUMBER_SEARCH_FAILED: &str = "Error searching by flight number.";
pub const ROUTE_SEARCH_FAILED: &str = "Error searching by route.";
pub const SAVED: &str = "Flight has been saved to favourites.";
pub const SAVE_REQUIRES_SIGN_IN: &str = "You must be logged in to add to your Favourites.";

// ── Featured ─────────────────────────────────────────────────────────
pub const FEATURED_FAILED: &str = "Failed to load Featured Flights.";

// ── Favourites ───────────────────────────────────────────────────────
pub const LOAD_REQUIRES_SIGN_IN: &str = "Please log in to view favourite flights.";
pub const LOAD_FAILED: &str = "Failed to load favourites.";
pub const DELETE_REQUIRES_SIGN_IN: &str = "You must be logged in to remove flights.";
pub const DELETE_MISSING_ID: &str = "Missing document ID for this flight.";
pub const DELETE_FAILED: &str = "Failed to remove from list.";

/// `No flights found for "AC123".`
pub fn no_flights_for_number(flight_number: &str) -> String {
    format!("No flights found for \"{flight_number}\".")
}

/// `No flights found for YWG to YUL`
pub fn no_flights_for_route(departure: &str, arrival: &str) -> String {
    format!("No flights found for {departure} to {arrival}")
}

/// `Failed to save: <reason>`
pub fn save_failed(reason: &str) -> String {
    format!("Failed to save: {reason}")
}
