//! Hosted search index client
//!
//! A single POST round trip per query against the index's REST endpoint.
//! The client owns a current-thread runtime; callers run on the search
//! worker thread and block on each round trip.

use std::fmt;

use super::{SearchError, SearchResults};

/// Hosted full-text search index client
pub struct HostedClient {
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    host: String,
    app_id: String,
    api_key: String,
    index: String,
}

impl fmt::Debug for HostedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedClient")
            .field("host", &self.host)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl HostedClient {
    /// Create a new hosted client
    pub fn new(
        host: String,
        app_id: String,
        api_key: String,
        index: String,
    ) -> Result<Self, SearchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            runtime,
            host,
            app_id,
            api_key,
            index,
        })
    }

    /// Run one query round trip, returning hit names in relevance order
    pub fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = format!(
            "{}/1/indexes/{}/query",
            self.host.trim_end_matches('/'),
            self.index
        );
        let body = serde_json::json!({ "query": query });

        let results: SearchResults = self.runtime.block_on(async {
            let response = self
                .http
                .post(&url)
                .header("x-application-id", &self.app_id)
                .header("x-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(SearchError::Api {
                    code: status.as_u16(),
                    message,
                });
            }

            response
                .json::<SearchResults>()
                .await
                .map_err(|e| SearchError::Parse(e.to_string()))
        })?;

        Ok(results.hits.into_iter().map(|hit| hit.name).collect())
    }
}
