use gh_search::{GitHubSearcher, Query, SearchConfig, SearchError, SearchKind};
use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response and hand back the request head it received.
async fn serve_once(status: &str, body: &str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    let url = Url::parse(&format!("http://{addr}/")).unwrap();
    (url, handle)
}

fn searcher(api_url: Url) -> GitHubSearcher {
    GitHubSearcher::new(SearchConfig::default().with_api_url(api_url).with_debug(true)).unwrap()
}

#[tokio::test]
async fn repositories_are_returned_in_order() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"total_count":2,"incomplete_results":false,"items":[{"full_name":"golang/go"},{"full_name":"golang/tools"}]}"#,
    )
    .await;

    let names = searcher(url).search_repositories("golang").await.unwrap();
    assert_eq!(names, vec!["golang/go", "golang/tools"]);

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /search/repositories?q=golang HTTP/1.1\r\n"));
    assert!(head.to_ascii_lowercase().contains("user-agent: gh-search/"));
    assert!(!head.to_ascii_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn users_are_returned() {
    let (url, server) = serve_once("200 OK", r#"{"items":[{"login":"torvalds"}]}"#).await;

    let query = Query::new(SearchKind::Users, "torvalds");
    let names = searcher(url).search(&query).await.unwrap();
    assert_eq!(names, vec!["torvalds"]);

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /search/users?q=torvalds HTTP/1.1\r\n"));
}

#[tokio::test]
async fn empty_items_give_empty_result() {
    let (url, _server) = serve_once("200 OK", r#"{"items":[]}"#).await;
    let names = searcher(url).search_users("nobody-at-all").await.unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn missing_field_gives_empty_string() {
    let (url, _server) = serve_once("200 OK", r#"{"items":[{}]}"#).await;
    let names = searcher(url).search_repositories("x").await.unwrap();
    assert_eq!(names, vec![""]);
}

#[tokio::test]
async fn error_status_fails_regardless_of_body() {
    for status in [
        "300 Multiple Choices",
        "404 Not Found",
        "500 Internal Server Error",
    ] {
        let (url, _server) = serve_once(status, r#"{"items":[{"login":"torvalds"}]}"#).await;
        let result = searcher(url).search_users("torvalds").await;
        assert_eq!(result, Err(SearchError));
    }
}

#[tokio::test]
async fn malformed_body_fails() {
    for body in ["<html>rate limited</html>", r#"{"message":"ok"}"#] {
        let (url, _server) = serve_once("200 OK", body).await;
        let result = searcher(url).search_repositories("golang").await;
        assert_eq!(result, Err(SearchError));
    }
}

#[tokio::test]
async fn term_is_encoded_exactly_once() {
    let (url, server) = serve_once("200 OK", r#"{"items":[]}"#).await;
    searcher(url)
        .search_repositories("tokio language:rust&sort=stars")
        .await
        .unwrap();

    let head = server.await.unwrap();
    assert!(head.starts_with(
        "GET /search/repositories?q=tokio+language%3Arust%26sort%3Dstars HTTP/1.1\r\n"
    ));
}

#[tokio::test]
async fn whitespace_term_is_sent() {
    let (url, server) = serve_once("200 OK", r#"{"items":[{"login":"a"}]}"#).await;
    let names = searcher(url).search_users(" ").await.unwrap();
    assert_eq!(names, vec!["a"]);

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /search/users?q=+ HTTP/1.1\r\n"));
}

#[tokio::test]
async fn connection_failure_is_a_search_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/")).unwrap();
    let result = searcher(url).search_users("torvalds").await;
    assert_eq!(result, Err(SearchError));
}

#[tokio::test]
async fn error_message_is_uniform() {
    assert_eq!(SearchError.to_string(), "could not complete search");
}
