//! Response envelope shapes shared by every Asana endpoint.

use serde::Deserialize;

/// Single-object responses arrive wrapped in a `data` field.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Collection responses carry the page under `data` plus an optional
/// continuation token in `next_page`.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_page: Option<NextPage>,
}

/// Continuation pointer for offset pagination. Only `offset` matters to the
/// client; `path` and `uri` are informational.
#[derive(Debug, Deserialize, Clone)]
pub struct NextPage {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}
