//! Remote matching service client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use doodleseek_config::SearchConfig;

use crate::SearchError;
use crate::types::{SearchRequest, SearchResult};

/// Trait for search backends
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    /// Submit a base64-encoded sketch snapshot and return ranked matches
    async fn submit(&self, image_data: &str) -> Result<SearchResult, SearchError>;
}

/// HTTP client for the matching service.
///
/// The endpoint is injected at construction via [`SearchConfig`]; there is no
/// compiled-in address. One POST per submission, no automatic retries.
pub struct HttpSearchClient {
    endpoint: String,
    client: Client,
}

impl HttpSearchClient {
    /// Build a client for the configured endpoint
    pub fn new(config: &SearchConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|error| {
            warn!(%error, "HTTP client options rejected, falling back to defaults");
            Client::new()
        });
        Self {
            endpoint: config.endpoint.clone(),
            client,
        }
    }

    /// The endpoint this client submits to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchClient {
    async fn submit(&self, image_data: &str) -> Result<SearchResult, SearchError> {
        debug!(
            endpoint = %self.endpoint,
            encoded_len = image_data.len(),
            "submitting sketch"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchRequest {
                image_data: image_data.to_string(),
            })
            .send()
            .await
            .map_err(|error| SearchError::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!("server returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|error| SearchError::Network(error.to_string()))?;

        let result: SearchResult =
            serde_json::from_str(&body).map_err(|error| SearchError::Decode(error.to_string()))?;

        debug!(
            matches = result.matches.len(),
            search_time_ms = result.search_time_ms,
            "search response decoded"
        );

        Ok(result)
    }
}
