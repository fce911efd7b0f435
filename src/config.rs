use reqwest::Url;

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// Settings handed to [`GitHubSearcher`](crate::GitHubSearcher) at construction.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API root the search endpoints are resolved against.
    pub api_url: Url,
    /// Emit debug traces for requests and failures.
    pub debug_enabled: bool,
    /// Sent on every request. GitHub refuses requests without one.
    pub user_agent: String,
}

impl SearchConfig {
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            debug_enabled: false,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}
