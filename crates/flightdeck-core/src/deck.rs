// ── FlightDeck ──
//
// Wires the HTTP-backed provider and store to a session and hands out
// controllers that share them.

use std::sync::Arc;

use flightdeck_api::{AviationClient, DocumentClient, TransportConfig};
use tracing::debug;

use crate::config::ClientConfig;
use crate::controller::{FavouritesController, FeaturedController, SearchController};
use crate::error::CoreError;
use crate::identity::{IdentityProvider, Session, UserId};
use crate::store::DocumentFavourites;

pub type Search = SearchController<AviationClient, DocumentFavourites>;
pub type Featured = FeaturedController<AviationClient>;
pub type Favourites = FavouritesController<AviationClient, DocumentFavourites>;

/// Entry point for consumers.
///
/// Cheaply cloneable; controllers created from one `FlightDeck` share the
/// same HTTP clients and session.
#[derive(Clone)]
pub struct FlightDeck {
    config: Arc<ClientConfig>,
    provider: Arc<AviationClient>,
    store: Arc<DocumentFavourites>,
    session: Arc<Session>,
}

impl FlightDeck {
    /// Build clients from configuration. Does not contact either backend.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls.clone(),
            timeout: config.timeout,
        };

        let provider = AviationClient::new(
            config.provider_url.as_str(),
            config.access_key.clone(),
            &transport,
        )
        .map_err(|e| config_error("flight provider", &e))?;

        let documents = DocumentClient::new(
            config.store_url.as_str(),
            config.store_token.as_ref(),
            &transport,
        )
        .map_err(|e| config_error("favourites store", &e))?;

        let session = match config.user_id.as_deref().and_then(UserId::new) {
            Some(user) => Session::signed_in(user),
            None => Session::anonymous(),
        };
        debug!(
            provider = %config.provider_url,
            store = %config.store_url,
            signed_in = session.current_user().is_some(),
            "flightdeck configured"
        );

        Ok(Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
            store: Arc::new(DocumentFavourites::new(documents)),
            session: Arc::new(session),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session the controllers read the signed-in user from.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn search(&self) -> Search {
        SearchController::new(
            Arc::clone(&self.provider),
            Arc::clone(&self.store),
            self.identity(),
        )
    }

    /// Featured flights for the configured base airport.
    pub fn featured(&self) -> Featured {
        self.featured_at(&self.config.base_airport)
    }

    pub fn featured_at(&self, base_airport: &str) -> Featured {
        FeaturedController::with_base_airport(Arc::clone(&self.provider), base_airport)
    }

    pub fn favourites(&self) -> Favourites {
        FavouritesController::with_refresh_concurrency(
            Arc::clone(&self.provider),
            Arc::clone(&self.store),
            self.identity(),
            self.config.refresh_concurrency,
        )
    }

    fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.session) as Arc<dyn IdentityProvider>
    }
}

fn config_error(backend: &str, err: &flightdeck_api::Error) -> CoreError {
    CoreError::Config {
        message: format!("cannot build {backend} client: {err}"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use secrecy::SecretString;

    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new(
            "http://localhost:9/v1/".parse().unwrap(),
            SecretString::from("key".to_string()),
            "http://localhost:9/v1/projects/p/databases/(default)/documents/"
                .parse()
                .unwrap(),
        )
    }

    #[test]
    fn user_id_signs_in_the_session() {
        let mut cfg = config();
        cfg.user_id = Some("u1".into());
        let deck = FlightDeck::new(cfg).unwrap();
        assert_eq!(deck.session().current_user().unwrap().as_str(), "u1");
    }

    #[test]
    fn blank_user_id_is_anonymous() {
        let mut cfg = config();
        cfg.user_id = Some("  ".into());
        let deck = FlightDeck::new(cfg).unwrap();
        assert!(deck.session().current_user().is_none());
    }

    #[test]
    fn featured_uses_configured_base_airport() {
        let mut cfg = config();
        cfg.base_airport = "yyz".into();
        let deck = FlightDeck::new(cfg).unwrap();
        assert_eq!(deck.featured().base_airport(), "YYZ");
    }
}
