// flightdeck-api: Async Rust clients for the flight data provider and the document store

pub mod aviation;
pub mod document;
pub mod error;
pub mod transport;

pub use aviation::AviationClient;
pub use document::{Document, DocumentClient};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
