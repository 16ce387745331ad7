//! Repository search over the GitHub REST API.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{FkgitError, Result};

/// Default search endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";

/// One candidate repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// `owner/name`.
    pub full_name: String,
    /// Repository name without the owner; becomes the install directory.
    pub name: String,
    /// URL handed to `git clone`.
    pub clone_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SearchResult {
    /// One-line listing entry, numbered from 1.
    pub fn listing(&self, number: usize) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.trim().is_empty() => {
                format!("{}: {} - {}", number, self.full_name, desc.trim())
            }
            _ => format!("{}: {}", number, self.full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

/// Anything that can turn a query into ranked candidates.
pub trait RepositorySearch {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Blocking client for the search endpoint.
pub struct SearchClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl SearchClient {
    /// Create a client for `api_url`.
    ///
    /// `timeout` of `None` waits indefinitely.
    pub fn new(api_url: &str, token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fkgit/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token,
        })
    }
}

impl RepositorySearch for SearchClient {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = Url::parse_with_params(&self.api_url, &[("q", query)])
            .map_err(|e| anyhow::anyhow!("Invalid search URL {}: {}", self.api_url, e))?;

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!("Searching repositories for {:?}", query);
        let response = request.send()?;

        if !response.status().is_success() {
            return Err(FkgitError::SearchFailed {
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse = response.json()?;
        tracing::debug!("Search returned {} items", body.items.len());
        Ok(body.items)
    }
}
