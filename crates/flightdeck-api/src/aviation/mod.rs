pub mod client;
mod flights;
pub mod models;

pub use client::{AviationClient, DEFAULT_BASE_URL};
pub use models::{Airline, AirportInfo, FlightData, FlightInfo};
