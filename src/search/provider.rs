//! Search provider abstraction
//!
//! Defines the SearchProvider enum, SearchError types, the wire shapes, and
//! the factory for creating provider instances from configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::config::SearchConfig;

mod builtin;
mod hosted;

pub use builtin::BuiltinIndex;
pub use hosted::HostedClient;

/// Errors that can occur during a search round trip
#[derive(Debug, Error)]
pub enum SearchError {
    /// Hosted search is not configured (missing credentials or host)
    #[error("Search not configured: {0}")]
    NotConfigured(String),

    /// Network error during the round trip
    #[error("Network error: {0}")]
    Network(String),

    /// The index returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the index response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A single hit returned by the search index
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub name: String,
    #[serde(rename = "objectID")]
    pub id: String,
}

/// Wire shape of a query response: hits in relevance order
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
}

/// Search provider implementations
#[derive(Debug)]
pub enum SearchProvider {
    /// Hosted full-text index queried over HTTP
    Hosted(HostedClient),
    /// In-memory subject catalog, used when no hosted index is configured
    Builtin(BuiltinIndex),
}

impl SearchProvider {
    /// Create a provider from configuration.
    ///
    /// Returns an error when the hosted index is requested but incompletely
    /// configured.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        if !config.hosted {
            return Ok(SearchProvider::Builtin(BuiltinIndex::default()));
        }

        let host = Some(&config.host)
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| {
                SearchError::NotConfigured("Missing or empty host in [search] config".to_string())
            })?;

        let app_id = config
            .app_id
            .as_ref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                SearchError::NotConfigured("Missing or empty app_id in [search] config".to_string())
            })?;

        let api_key = config
            .api_key
            .as_ref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                SearchError::NotConfigured(
                    "Missing or empty api_key in [search] config".to_string(),
                )
            })?;

        Ok(SearchProvider::Hosted(HostedClient::new(
            host.clone(),
            app_id.clone(),
            api_key.clone(),
            config.index.clone(),
        )?))
    }

    /// Run one query round trip, returning hit names in relevance order.
    /// An empty query means "no filter".
    pub fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        match self {
            SearchProvider::Hosted(client) => client.search(query),
            SearchProvider::Builtin(index) => Ok(index.search(query)),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
