// Wire types for the Firestore-style documents REST API.
//
// Field values are typed wrappers (`{"stringValue": "..."}`); they are
// kept as raw JSON so documents written by other clients with other value
// kinds still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A stored document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Full resource name, e.g. `projects/p/databases/(default)/documents/users/u/favourites/abc`.
    /// Empty on documents that have not been created yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    /// The document id: the last segment of `name`.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Read a `stringValue` field.
    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.get("stringValue")?.as_str()
    }

    /// Set a `stringValue` field.
    pub fn with_string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_owned(), json!({ "stringValue": value.into() }));
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
