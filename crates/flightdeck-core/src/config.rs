// ── Runtime client configuration ──
//
// Describes which backends to talk to and how. Carries credentials and
// tuning but never touches disk; the CLI builds one and hands it in.

use std::time::Duration;

use flightdeck_api::TlsMode;
use secrecy::SecretString;
use url::Url;

use crate::controller::{DEFAULT_BASE_AIRPORT, DEFAULT_REFRESH_CONCURRENCY};

/// Everything needed to build providers, stores, and controllers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Flight data API base URL.
    pub provider_url: Url,
    /// Flight data API access key.
    pub access_key: SecretString,
    /// Document store base URL (`.../databases/(default)/documents/`).
    pub store_url: Url,
    /// Bearer token for the document store, if it requires one.
    pub store_token: Option<SecretString>,
    /// Signed-in user; `None` runs anonymously.
    pub user_id: Option<String>,
    /// Airport used for featured flights.
    pub base_airport: String,
    pub tls: TlsMode,
    pub timeout: Duration,
    /// Status lookups in flight at once during a favourites refresh.
    pub refresh_concurrency: usize,
}

impl ClientConfig {
    /// Config with default tuning for the given backends.
    pub fn new(provider_url: Url, access_key: SecretString, store_url: Url) -> Self {
        Self {
            provider_url,
            access_key,
            store_url,
            store_token: None,
            user_id: None,
            base_airport: DEFAULT_BASE_AIRPORT.to_owned(),
            tls: TlsMode::default(),
            timeout: Duration::from_secs(30),
            refresh_concurrency: DEFAULT_REFRESH_CONCURRENCY,
        }
    }
}
