//! HTTP client for the alquran.cloud REST API.
//!
//! The service wraps every payload in an envelope: `{ code, status, data }`.
//! Only `data` is deserialized here; unknown fields are ignored so upstream
//! additions never break parsing.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use super::types::{Chapter, ChapterDetail, RevelationType, Verse};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Errors that can occur while talking to the chapter service.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service returned a non-success HTTP status.
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The seam between the app and the chapter service. The live implementation
/// talks HTTP; tests substitute a stub or point the live one at a mock server.
#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Returns the name of the backing service.
    fn name(&self) -> &str;

    /// Fetches the full 114-entry surah index, in service order.
    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, ApiError>;

    /// Fetches one surah's verses in the configured translation edition.
    async fn fetch_verses(&self, number: u16) -> Result<ChapterDetail, ApiError>;
}

// ============================================================================
// alquran.cloud Wire Types
// ============================================================================

/// Standard alquran.cloud response envelope. `code` and `status` are ignored;
/// the HTTP status is authoritative for error handling.
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    data: T,
}

/// One element of the `GET /surah` index array.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SurahEntry {
    number: u16,
    english_name: String,
    /// Arabic name. The service calls this field `name`.
    name: String,
    revelation_type: RevelationType,
    number_of_ayahs: u16,
}

/// Payload of `GET /surah/{number}/{edition}`.
#[derive(Deserialize, Debug)]
struct SurahVerses {
    ayahs: Vec<AyahEntry>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AyahEntry {
    number_in_surah: u16,
    text: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn entry_to_chapter(entry: SurahEntry) -> Chapter {
    Chapter {
        number: entry.number,
        english_name: entry.english_name,
        arabic_name: entry.name,
        revelation: entry.revelation_type,
        verse_count: entry.number_of_ayahs,
    }
}

fn ayahs_to_detail(chapter_number: u16, payload: SurahVerses) -> ChapterDetail {
    ChapterDetail {
        chapter_number,
        verses: payload
            .ayahs
            .into_iter()
            .map(|a| Verse {
                number_in_chapter: a.number_in_surah,
                text: a.text,
            })
            .collect(),
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Live alquran.cloud client.
pub struct AlQuranCloud {
    base_url: String,
    edition: String,
    client: reqwest::Client,
}

impl AlQuranCloud {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public API)
    /// * `edition` - Translation edition identifier, e.g. "en.asad"
    pub fn new(base_url: Option<String>, edition: String) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            edition,
            client: reqwest::Client::new(),
        }
    }

    /// Issues a GET and returns the body text of a successful response.
    async fn get_body(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("alquran.cloud response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("alquran.cloud API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait]
impl ChapterSource for AlQuranCloud {
    fn name(&self) -> &str {
        "alquran.cloud"
    }

    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        let url = format!("{}/surah", self.base_url);
        let body = self.get_body(&url).await?;
        let envelope: Envelope<Vec<SurahEntry>> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        let chapters: Vec<Chapter> = envelope.data.into_iter().map(entry_to_chapter).collect();
        info!("surah index fetched: {} chapters", chapters.len());
        Ok(chapters)
    }

    async fn fetch_verses(&self, number: u16) -> Result<ChapterDetail, ApiError> {
        let url = format!("{}/surah/{}/{}", self.base_url, number, self.edition);
        let body = self.get_body(&url).await?;
        let envelope: Envelope<SurahVerses> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        let detail = ayahs_to_detail(number, envelope.data);
        info!(
            "verses fetched: surah {} ({} ayahs, edition {})",
            number,
            detail.verses.len(),
            self.edition
        );
        Ok(detail)
    }
}
