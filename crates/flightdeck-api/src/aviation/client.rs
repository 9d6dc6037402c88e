// Flight data HTTP client
//
// Wraps `reqwest::Client` with access-key injection, base URL joining and
// envelope unwrapping. The endpoint methods live in `flights.rs` so this
// module stays focused on transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use super::models::{FlightData, FlightsResponse};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com/v1/";

/// Raw HTTP client for the Aviationstack REST API.
///
/// Every query hits the same `flights` resource with different filters.
/// Methods return the unwrapped `data` payload; a null `data` is returned
/// as an empty vector, never as an error.
pub struct AviationClient {
    http: reqwest::Client,
    base_url: Url,
    access_key: SecretString,
}

impl AviationClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(
        base_url: &str,
        access_key: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url, access_key)
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        access_key: SecretString,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            access_key,
        })
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// `GET {base}/flights` with the given filters plus `access_key`.
    pub(crate) async fn get_flights(
        &self,
        params: &[(&str, String)],
    ) -> Result<Vec<FlightData>, Error> {
        let url = self.base_url.join("flights")?;
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(&[("access_key", self.access_key.expose_secret())])
            .query(params)
            .send()
            .await?;

        parse_envelope(resp).await
    }
}

/// Ensure the base URL ends with `/` so relative joins keep the version path.
fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Parse the `{ data, error }` envelope.
///
/// The provider reports bad keys and quota problems as an `error` object,
/// sometimes with HTTP 200, so the body is inspected before the status.
async fn parse_envelope(resp: reqwest::Response) -> Result<Vec<FlightData>, Error> {
    let status = resp.status();
    let body = resp.text().await?;

    if let Ok(FlightsResponse {
        error: Some(err), ..
    }) = serde_json::from_str::<FlightsResponse>(&body)
    {
        let code = err.code.unwrap_or_else(|| status.as_u16().to_string());
        let message = err.message.unwrap_or_default();
        if status == reqwest::StatusCode::UNAUTHORIZED || code == "invalid_access_key" {
            return Err(Error::Authentication { message });
        }
        return Err(Error::Provider { code, message });
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication {
            message: "access key rejected".into(),
        });
    }

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }

    let envelope: FlightsResponse = serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })?;

    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = normalize_base_url("http://api.example.com/v1").expect("valid URL");
        assert_eq!(url.as_str(), "http://api.example.com/v1/");
        assert_eq!(
            url.join("flights").expect("join").as_str(),
            "http://api.example.com/v1/flights"
        );
    }

    #[test]
    fn base_url_with_slash_is_unchanged() {
        let url = normalize_base_url("http://api.example.com/v1/").expect("valid URL");
        assert_eq!(url.as_str(), "http://api.example.com/v1/");
    }
}
