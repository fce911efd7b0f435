use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{SearchError, SearchFailure};
use crate::models::{Query, Repository, SearchEnvelope, SearchItem, SearchKind, User};
use crate::SearchConfig;

pub struct GitHubSearcher {
    client: Client,
    config: SearchConfig,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher instance
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        // Create HTTP client
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| trace_failure(config.debug_enabled, SearchFailure::Client(e)))?;

        Ok(GitHubSearcher { client, config })
    }

    /// Run a single search and return the extracted names in response order.
    pub async fn search(&self, query: &Query) -> Result<Vec<String>, SearchError> {
        let result = match query.kind() {
            SearchKind::Repositories => self.fetch::<Repository>(query).await,
            SearchKind::Users => self.fetch::<User>(query).await,
        };

        result.map_err(|failure| trace_failure(self.config.debug_enabled, failure))
    }

    /// Full names (`owner/repo`) of repositories matching `term`.
    pub async fn search_repositories(&self, term: &str) -> Result<Vec<String>, SearchError> {
        self.search(&Query::new(SearchKind::Repositories, term)).await
    }

    /// Logins of users matching `term`.
    pub async fn search_users(&self, term: &str) -> Result<Vec<String>, SearchError> {
        self.search(&Query::new(SearchKind::Users, term)).await
    }

    async fn fetch<T: SearchItem>(&self, query: &Query) -> Result<Vec<String>, SearchFailure> {
        let url = self.search_url(query)?;

        if self.config.debug_enabled {
            debug!("Requesting URL: {}", url);
        }
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SearchFailure::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(SearchFailure::Transport)?;

        if !status.is_success() {
            return Err(SearchFailure::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let names = extract_names::<T>(&body)?;
        if self.config.debug_enabled {
            debug!(
                "Extracted {} '{}' values from {} response",
                names.len(),
                query.kind().field(),
                status
            );
        }
        Ok(names)
    }

    /// Build the endpoint URL for `query` with the term as the `q` parameter.
    fn search_url(&self, query: &Query) -> Result<Url, SearchFailure> {
        if query.term().is_empty() {
            return Err(SearchFailure::EmptyTerm);
        }

        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = self.config.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(query.kind().path())?;
        url.query_pairs_mut().clear().append_pair("q", query.term());
        Ok(url)
    }
}

/// Decode an envelope and pull one name out of each item, keeping order.
fn extract_names<T: SearchItem>(body: &[u8]) -> Result<Vec<String>, SearchFailure> {
    let envelope: SearchEnvelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.items.into_iter().map(SearchItem::into_name).collect())
}

fn trace_failure(debug_enabled: bool, failure: SearchFailure) -> SearchError {
    if debug_enabled {
        debug!("Search failed: {}", failure);
    }
    failure.into()
}
