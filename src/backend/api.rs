//! HTTP client for the Gemini `generateContent` API

use reqwest::Client;

use super::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, SearchResult};
use crate::config::Config;
use crate::error::SearchError;

/// Client for grounded searches against the Gemini API.
///
/// One request per call. No retries, no timeout beyond the transport
/// default, no cancellation.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Run one grounded search
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        tracing::debug!("Sending grounded search to model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::grounded(query))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error calling Gemini API: {}", e);
                SearchError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Could not read Gemini response body: {}", e);
            SearchError::from(e)
        })?;

        if !status.is_success() {
            let message = api_error_message(&body);
            tracing::error!("Gemini API returned {}: {}", status, message);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Could not decode Gemini response: {}", e);
            SearchError::Parse(e.to_string())
        })?;

        let result = parsed.into_search_result();
        tracing::info!("Search complete: {} source(s)", result.sources.len());
        Ok(result)
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
