// ── Core error types ──
//
// Domain errors from flightdeck-core. Consumers never see HTTP status
// codes or JSON parse failures directly: the adapters translate
// `flightdeck_api::Error` into provider or store variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Identity / references ────────────────────────────────────────
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Invalid reference: {reason}")]
    InvalidReference { reason: String },

    // ── Backends ─────────────────────────────────────────────────────
    #[error("Flight provider error: {message}")]
    Provider { message: String },

    #[error("{message}")]
    Store { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Wrap a transport error raised while talking to the flight provider.
    pub fn provider(err: &flightdeck_api::Error) -> Self {
        Self::Provider {
            message: err.to_string(),
        }
    }

    /// Wrap a transport error raised while talking to the favourites store.
    ///
    /// Rejected credentials surface as `NotAuthenticated`, like a missing owner.
    pub fn store(err: &flightdeck_api::Error) -> Self {
        match err {
            flightdeck_api::Error::Authentication { .. } => Self::NotAuthenticated,
            other => Self::Store {
                message: other.to_string(),
            },
        }
    }
}
