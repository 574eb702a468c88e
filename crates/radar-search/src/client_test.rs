use super::*;

fn test_client(base_url: &str) -> TavilyClient {
    TavilyClient::with_base_url("tvly-test", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn search_url_appends_segment() {
    let client = test_client("https://api.tavily.com");
    assert_eq!(
        client.search_url().unwrap().as_str(),
        "https://api.tavily.com/search"
    );
}

#[test]
fn search_url_strips_trailing_slashes() {
    let client = test_client("http://localhost:9000/proxy//");
    assert_eq!(
        client.search_url().unwrap().as_str(),
        "http://localhost:9000/proxy/search"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = TavilyClient::with_base_url("tvly-test", 30, "not a url");
    assert!(matches!(result, Err(SearchError::InvalidBaseUrl { .. })));
}

#[test]
fn error_message_reads_nested_detail() {
    let body = r#"{"detail": {"error": "Unauthorized: missing or invalid API key."}}"#;
    assert_eq!(
        TavilyClient::error_message(body),
        "Unauthorized: missing or invalid API key."
    );
}

#[test]
fn error_message_reads_flat_detail() {
    let body = r#"{"detail": "Usage limit exceeded"}"#;
    assert_eq!(TavilyClient::error_message(body), "Usage limit exceeded");
}

#[test]
fn error_message_falls_back_to_body() {
    assert_eq!(TavilyClient::error_message(" bad gateway \n"), "bad gateway");
    assert_eq!(TavilyClient::error_message(""), "empty response body");
}
