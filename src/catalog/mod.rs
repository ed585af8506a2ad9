//! Game catalog store and loader.
//!
//! The catalog is a JSON array of game records fetched exactly once at
//! startup, either from an HTTP(S) URL or from a file on disk. Once loaded it
//! is immutable for the rest of the session.

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::{Error, Result};

/// Unique identifier of a catalog entry.
///
/// Catalog files in the wild spell ids both as strings and as integers, so
/// both are accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => GameId(text),
            RawId::Signed(n) => GameId(n.to_string()),
            RawId::Unsigned(n) => GameId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub url: String,
}

/// The loaded, immutable list of games in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<GameEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_entries(entries: Vec<GameEntry>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if !seen.insert(&entry.id) {
                    return Err(Error::Catalog(format!(
                        "duplicate game id '{}' ({})",
                        entry.id, entry.title
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<GameEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn get(&self, id: &GameId) -> Option<&GameEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    Local(PathBuf),
}

impl CatalogSource {
    /// Anything with an http(s) scheme is fetched over the network,
    /// everything else is treated as a filesystem path.
    pub fn parse(source: &str) -> Self {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Remote(source.to_string())
        } else {
            CatalogSource::Local(PathBuf::from(source))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Remote(url) => f.write_str(url),
            CatalogSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("games-hub/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Load the catalog once. There is no retry: a failure here is final for
    /// the session.
    pub async fn fetch(&self, source: &CatalogSource) -> Result<Catalog> {
        log::info!("Loading game catalog from {}", source);

        let catalog = match source {
            CatalogSource::Remote(url) => {
                let response = self.client.get(url).send().await?;

                if !response.status().is_success() {
                    return Err(Error::Catalog(format!(
                        "Failed to fetch catalog: HTTP {}",
                        response.status()
                    )));
                }

                let body = response.text().await?;
                Catalog::from_json(&body)?
            }
            CatalogSource::Local(path) => {
                let contents = tokio::fs::read_to_string(path).await?;
                Catalog::from_json(&contents)?
            }
        };

        log::debug!("Catalog loaded with {} games", catalog.len());
        Ok(catalog)
    }
}
