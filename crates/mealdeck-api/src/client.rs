//! HTTP client for the recipe catalog

use std::time::Duration;

use reqwest::Client;
use url::Url;

use mealdeck_core::prelude::*;
use mealdeck_core::{Category, MealDetail, MealSummary};

use crate::protocol::{self, Endpoint};
use crate::source::RecipeSource;

/// Public TheMealDB v1 API with the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// [`RecipeSource`] backed by the recipe catalog's HTTP API
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: Client,
    base: Url,
}

impl HttpRecipeSource {
    /// Create a client for `base_url`
    ///
    /// The base is normalised to end with `/` so endpoint paths are joined
    /// below it rather than replacing its last segment.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut normalised = base_url.trim().to_string();
        if !normalised.ends_with('/') {
            normalised.push('/');
        }
        let base = Url::parse(&normalised)
            .map_err(|e| Error::config(format!("Invalid API base URL {base_url:?}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for an endpoint, including its query parameter
    pub fn endpoint_url(&self, endpoint: Endpoint, param: Option<&str>) -> Result<Url> {
        let mut url = self
            .base
            .join(endpoint.path())
            .map_err(|e| Error::config(format!("Invalid endpoint URL: {e}")))?;
        if let (Some(key), Some(value)) = (endpoint.query_key(), param) {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    /// Issue one GET and return the response body
    async fn get(&self, endpoint: Endpoint, param: Option<&str>) -> Result<String> {
        let url = self.endpoint_url(endpoint, param)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", endpoint.path(), status);
            return Err(Error::http_status(endpoint.path(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))
    }
}

impl RecipeSource for HttpRecipeSource {
    async fn categories(&self) -> Result<Vec<Category>> {
        let body = self.get(Endpoint::Categories, None).await?;
        protocol::parse_categories(&body)
    }

    async fn search(&self, query: &str) -> Result<Vec<MealSummary>> {
        let body = self.get(Endpoint::Search, Some(query)).await?;
        protocol::parse_meal_summaries(Endpoint::Search, &body)
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>> {
        let body = self
            .get(Endpoint::FilterByCategory, Some(category))
            .await?;
        protocol::parse_meal_summaries(Endpoint::FilterByCategory, &body)
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>> {
        let body = self.get(Endpoint::Lookup, Some(id)).await?;
        protocol::parse_meal_detail(&body)
    }
}
