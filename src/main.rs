use clap::Parser;
use gh_search::{Args, GitHubSearcher};
use std::process::ExitCode;
use tracing::{debug, Level};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize the tracing logger; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    debug!("Command: {:?}", args.command);

    let query = args.query();
    debug!("Search term: {}", query.term());

    let result = match GitHubSearcher::new(args.config()) {
        Ok(searcher) => searcher.search(&query).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(names) => {
            println!("{}", names.join(", "));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
