use std::sync::mpsc;

use serde::{Deserialize, Serialize};

/// Fixed billboard endpoint. The `title`/`ubication` query parameters are
/// part of the endpoint shape but always sent empty: filtering happens
/// client-side.
pub const CATALOG_ENDPOINT: &str = "https://movie.azurewebsites.net/api/cartelera";

/// One movie as served by the billboard API. Field names and casing are the
/// wire contract and must not change; the same shape is used to persist
/// favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Type", default)]
    pub genre: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Ubication", default)]
    pub ubication: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

pub enum CatalogFetchMessage {
    Complete(Vec<MovieRecord>),
    Error(String),
}

pub fn catalog_url(title: &str, ubication: &str) -> String {
    format!(
        "{}?title={}&ubication={}",
        CATALOG_ENDPOINT,
        urlencoding::encode(title),
        urlencoding::encode(ubication)
    )
}

/// Fetches the billboard on a worker thread and reports back over `sender`.
pub fn fetch_catalog_threaded(sender: mpsc::Sender<CatalogFetchMessage>) {
    fetch_catalog_from(&catalog_url("", ""), sender);
}

pub fn fetch_catalog_from(url: &str, sender: mpsc::Sender<CatalogFetchMessage>) {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(e) => {
            let _ = sender.send(CatalogFetchMessage::Error(format!(
                "Failed to reach the billboard service: {}",
                e
            )));
            return;
        }
    };

    if !response.status().is_success() {
        let _ = sender.send(CatalogFetchMessage::Error(format!(
            "Failed to load the billboard. Status code: {}",
            response.status().as_u16()
        )));
        return;
    }

    let payload: serde_json::Value = match response.json() {
        Ok(payload) => payload,
        Err(e) => {
            let _ = sender.send(CatalogFetchMessage::Error(format!(
                "Failed to decode the billboard response: {}",
                e
            )));
            return;
        }
    };

    let _ = sender.send(CatalogFetchMessage::Complete(parse_catalog(payload)));
}

/// A non-array payload is an empty billboard, not an error. Entries that do
/// not deserialize are dropped individually.
pub fn parse_catalog(payload: serde_json::Value) -> Vec<MovieRecord> {
    match payload {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}
