use thiserror::Error;

/// Top-level error type for the `flightdeck-api` crate.
///
/// Covers every failure mode of both API surfaces: transport, the flight
/// data provider's error envelope, and the document store's REST errors.
/// `flightdeck-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Authentication ──────────────────────────────────────────────
    /// Access key or bearer token rejected.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Flight provider ─────────────────────────────────────────────
    /// Error envelope from the flight provider (`{"error": {code, message}}`),
    /// which may arrive with HTTP 200.
    #[error("Provider error ({code}): {message}")]
    Provider { code: String, message: String },

    // ── Generic HTTP ────────────────────────────────────────────────
    /// Non-success HTTP status with whatever message the body carried.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_only_for_404() {
        let missing = Error::Api {
            status: 404,
            message: "gone".into(),
        };
        let denied = Error::Api {
            status: 403,
            message: "nope".into(),
        };
        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn server_errors_are_transient() {
        let busy = Error::Api {
            status: 503,
            message: "busy".into(),
        };
        let provider = Error::Provider {
            code: "usage_limit_reached".into(),
            message: "limit".into(),
        };
        assert!(busy.is_transient());
        assert!(!provider.is_transient());
    }
}
