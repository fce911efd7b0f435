//! # gh-search
//!
//! A small library and CLI for searching GitHub repositories and users.
//! A search issues one request, decodes the `items` envelope and returns one
//! name per item in the order GitHub sent them.
//!
//! ## Main Components
//!
//! - [`GitHubSearcher`]: performs searches against the configured API
//! - [`SearchConfig`]: API root, user agent and the debug switch
//! - [`Args`]: Command line argument structure
//!
//! ## Example
//!
//! ```no_run
//! use gh_search::{GitHubSearcher, SearchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let searcher = GitHubSearcher::new(SearchConfig::default())?;
//!
//!     let repos = searcher.search_repositories("golang").await?;
//!     println!("{}", repos.join(", "));
//!
//!     Ok(())
//! }
//! ```

mod args;
mod config;
mod error;
mod github_searcher;
mod models;

pub use crate::args::{Args, Command};
pub use crate::config::{SearchConfig, DEFAULT_API_URL};
pub use crate::error::SearchError;
pub use crate::github_searcher::GitHubSearcher;
pub use crate::models::{Query, SearchKind};
