use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Which GitHub search endpoint to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Repositories,
    Users,
}

impl SearchKind {
    /// Endpoint path relative to the API root.
    pub fn path(self) -> &'static str {
        match self {
            SearchKind::Repositories => "search/repositories",
            SearchKind::Users => "search/users",
        }
    }

    /// Name of the field pulled out of every result item.
    pub fn field(self) -> &'static str {
        match self {
            SearchKind::Repositories => "full_name",
            SearchKind::Users => "login",
        }
    }
}

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    kind: SearchKind,
    term: String,
}

impl Query {
    pub fn new(kind: SearchKind, term: impl Into<String>) -> Self {
        Query {
            kind,
            term: term.into(),
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The raw, unencoded search term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Top-level body returned by the search endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope<T> {
    pub items: Vec<T>,
}

/// An item from a search response that yields one name.
pub(crate) trait SearchItem: DeserializeOwned {
    fn into_name(self) -> String;
}

/// A repository from `/search/repositories`.
#[derive(Debug, Deserialize)]
pub(crate) struct Repository {
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SearchItem for Repository {
    fn into_name(self) -> String {
        self.full_name.unwrap_or_default()
    }
}

/// A user from `/search/users`.
#[derive(Debug, Deserialize)]
pub(crate) struct User {
    #[serde(default)]
    pub login: Option<String>,
}

impl SearchItem for User {
    fn into_name(self) -> String {
        self.login.unwrap_or_default()
    }
}
