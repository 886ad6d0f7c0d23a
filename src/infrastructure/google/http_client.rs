use std::time::Duration;

/// Shared HTTP client for all Google adapters.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("verba/", env!("CARGO_PKG_VERSION")))
        .build()
}

pub(crate) async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    format!("status {}: {}", status, body)
}
