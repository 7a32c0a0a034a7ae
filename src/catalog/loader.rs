//! One-shot catalog loading.
//!
//! The catalog is fetched exactly once at startup, from either an http(s)
//! URL or a local file. There is no retry and no cancellation: a failed load
//! is permanent for the session and surfaces as a fixed message in the UI.

use std::path::PathBuf;
use std::time::Duration;

use futures::StreamExt;
use url::Url;

use super::types::{Item, LoadError};
use crate::util::{sanitize_field, validate_url};

/// Size cap for the catalog payload (remote body or local file).
pub const MAX_CATALOG_BYTES: u64 = 2 * 1024 * 1024;

/// Request timeout for remote fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the catalog comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Fetched over http(s).
    Remote(Url),
    /// Read from the filesystem.
    Local(PathBuf),
}

impl CatalogSource {
    /// Interpret a raw source string: http(s) strings become validated
    /// remote URLs, everything else is treated as a file path.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(Self::Remote(validate_url(raw)?))
        } else {
            Ok(Self::Local(PathBuf::from(raw)))
        }
    }

    /// Display form for logging and status messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(url) => url.to_string(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

/// Load and deserialize the catalog.
///
/// On success the returned items are sanitized for terminal display
/// (control characters stripped from every text field). The caller owns the
/// result; nothing mutates it afterwards.
pub async fn load(source: &CatalogSource) -> Result<Vec<Item>, LoadError> {
    let bytes = match source {
        CatalogSource::Remote(url) => fetch_remote(url).await?,
        CatalogSource::Local(path) => read_local(path).await?,
    };

    let mut items: Vec<Item> = serde_json::from_slice(&bytes)?;
    for item in &mut items {
        sanitize_item(item);
    }

    tracing::info!(
        source = %source.describe(),
        count = items.len(),
        "Catalog loaded"
    );
    Ok(items)
}

async fn fetch_remote(url: &Url) -> Result<Vec<u8>, LoadError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let response = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?;

    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > MAX_CATALOG_BYTES {
            return Err(LoadError::TooLarge {
                size: len,
                max: MAX_CATALOG_BYTES,
            });
        }
    }

    // Chunked bodies carry no Content-Length; enforce the cap while
    // streaming so an oversized body is never fully buffered.
    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let next = bytes.len().saturating_add(chunk.len()) as u64;
        if next > MAX_CATALOG_BYTES {
            return Err(LoadError::TooLarge {
                size: next,
                max: MAX_CATALOG_BYTES,
            });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

async fn read_local(path: &PathBuf) -> Result<Vec<u8>, LoadError> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > MAX_CATALOG_BYTES {
        return Err(LoadError::TooLarge {
            size: meta.len(),
            max: MAX_CATALOG_BYTES,
        });
    }
    Ok(tokio::fs::read(path).await?)
}

fn sanitize_item(item: &mut Item) {
    item.name = sanitize_field(&item.name);
    item.description = sanitize_field(&item.description);
    item.category = sanitize_field(&item.category);
    item.link = item.link.trim().to_string();
}
