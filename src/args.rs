use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::config::DEFAULT_API_URL;
use crate::{Query, SearchConfig, SearchKind};

/// Search GitHub for repositories or users and print the matching names.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Print debug information while executing the command.
    #[clap(short, long, global = true)]
    pub debug: bool,

    /// Root of the GitHub REST API, e.g. for a GitHub Enterprise instance.
    #[clap(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Search for GitHub repositories.
    SearchRepos {
        /// Term to search repositories for.
        #[clap(value_parser = NonEmptyStringValueParser::new())]
        term: String,
    },
    /// Search for users on GitHub.
    SearchUsers {
        /// Term to search users for.
        #[clap(value_parser = NonEmptyStringValueParser::new())]
        term: String,
    },
}

impl Args {
    pub fn config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_api_url(self.api_url.clone())
            .with_debug(self.debug)
    }

    pub fn query(&self) -> Query {
        match &self.command {
            Command::SearchRepos { term } => Query::new(SearchKind::Repositories, term.as_str()),
            Command::SearchUsers { term } => Query::new(SearchKind::Users, term.as_str()),
        }
    }
}
