//! Sales Navigator client: thin wrapper over the RapidAPI proxy.
//!
//! One outbound request per call. No caching, no debouncing, no retries.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::search::filters::{AppliedFilter, FilterCategory, UpstreamFilter};
use crate::search::models::{
    FilterSuggestion, SearchResults, UpstreamSearchEnvelope, UpstreamSuggestions,
};

const SEARCH_ENDPOINT: &str = "premium_search_person";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("could not decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of filter suggestions and candidate pages.
///
/// Carried in `AppState` as `Arc<dyn CandidateSource>`.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn suggestions(
        &self,
        query: &str,
        category: FilterCategory,
    ) -> Result<Vec<FilterSuggestion>, SearchError>;

    async fn search(
        &self,
        filters: &[AppliedFilter],
        page: u32,
        account_number: u32,
    ) -> Result<SearchResults, SearchError>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    account_number: u32,
    page: u32,
    filters: &'a [UpstreamFilter],
}

/// HTTP client for the LinkedIn Sales Navigator proxy.
#[derive(Clone)]
pub struct SalesNavigatorClient {
    client: reqwest::Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl SalesNavigatorClient {
    pub fn new(api_key: String, host: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: format!("https://{host}"),
            host,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn request<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> RequestBuilder {
        self.client
            .post(self.url(endpoint))
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .json(body)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<String, SearchError> {
        debug!(endpoint, "calling sales navigator");
        let resp = self.request(endpoint, body).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl CandidateSource for SalesNavigatorClient {
    async fn suggestions(
        &self,
        query: &str,
        category: FilterCategory,
    ) -> Result<Vec<FilterSuggestion>, SearchError> {
        let body = self
            .post(category.suggestion_endpoint(), &json!({ "query": query }))
            .await?;
        let parsed: UpstreamSuggestions = serde_json::from_str(&body)?;
        let suggestions = parsed.data.unwrap_or_default();
        info!(
            category = category.token(),
            count = suggestions.len(),
            "fetched filter suggestions"
        );
        Ok(suggestions)
    }

    async fn search(
        &self,
        filters: &[AppliedFilter],
        page: u32,
        account_number: u32,
    ) -> Result<SearchResults, SearchError> {
        let upstream: Vec<UpstreamFilter> =
            filters.iter().map(AppliedFilter::to_upstream).collect();
        let request = SearchRequest {
            account_number,
            page,
            filters: &upstream,
        };

        let body = self.post(SEARCH_ENDPOINT, &request).await?;
        let envelope: UpstreamSearchEnvelope = serde_json::from_str(&body)?;
        let results = SearchResults::from(envelope);
        info!(
            page,
            filters = filters.len(),
            returned = results.candidates.len(),
            total = results.pagination.total,
            "candidate search complete"
        );
        Ok(results)
    }
}
