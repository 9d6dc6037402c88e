// ── Domain model ──

mod flight;
mod saved;
mod status;

pub use flight::{FlightLeg, FlightRecord, UNKNOWN_AIRLINE, UNKNOWN_AIRPORT, UNKNOWN_NUMBER};
pub use saved::SavedFlight;
pub use status::{FlightStatus, display_status};
