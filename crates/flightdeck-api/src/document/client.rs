// Async HTTP client for a Firestore-style documents REST API.
//
// Base path: /v1/projects/{project}/databases/(default)/documents/
// Auth: optional `Authorization: Bearer` header

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::models::{Document, ErrorResponse, ListDocumentsResponse};
use crate::error::Error;
use crate::transport::TransportConfig;

const FIRESTORE_HOST: &str = "https://firestore.googleapis.com";

/// Base URL of the default database of a hosted Firestore project.
pub fn firestore_base_url(project_id: &str) -> String {
    format!("{FIRESTORE_HOST}/v1/projects/{project_id}/databases/(default)/documents/")
}

/// Async client for document collections.
///
/// Paths are passed as segment slices (`&["users", uid, "favourites"]`)
/// and percent-encoded individually, so ids never break the URL.
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DocumentClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a transport config and an optional bearer token.
    pub fn new(
        base_url: &str,
        token: Option<&SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| Error::Authentication {
                    message: format!("invalid bearer token header value: {e}"),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = transport.build_client_with_headers(headers)?;
        Self::with_client(http, base_url)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Create a document with a server-assigned id.
    ///
    /// `POST {base}/{collection...}`
    pub async fn create_document(
        &self,
        collection: &[&str],
        document: &Document,
    ) -> Result<Document, Error> {
        let url = self.url(collection)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(document).send().await?;
        handle_response(resp).await
    }

    /// List every document of a collection, following `nextPageToken`.
    ///
    /// `GET {base}/{collection...}?pageToken=...`
    pub async fn list_documents(&self, collection: &[&str]) -> Result<Vec<Document>, Error> {
        let url = self.url(collection)?;
        let mut all = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(url.clone());
            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token)]);
            }
            debug!("GET {url} page_token={page_token:?}");

            let page: ListDocumentsResponse = handle_response(request.send().await?).await?;
            all.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(all)
    }

    /// Delete a single document.
    ///
    /// `DELETE {base}/{document...}`
    pub async fn delete_document(&self, document: &[&str]) -> Result<(), Error> {
        let url = self.url(document)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error(status, resp).await)
        }
    }
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if !status.is_success() {
        return Err(parse_error(status, resp).await);
    }

    let body = resp.text().await?;
    // An empty collection lists as `{}`.
    let body = if body.trim().is_empty() { "{}".to_owned() } else { body };
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&raw) {
        Ok(err) => err
            .error
            .message
            .or(err.error.status)
            .unwrap_or_else(|| status.to_string()),
        Err(_) if raw.is_empty() => status.to_string(),
        Err(_) => raw,
    };

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        Error::Authentication { message }
    } else {
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}
