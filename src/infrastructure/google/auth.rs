use std::fmt;

use reqwest::RequestBuilder;

/// Credentials attached to every Google API request.
#[derive(Clone, PartialEq, Eq)]
pub enum GoogleAuth {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// OAuth access token, e.g. from `gcloud auth print-access-token`.
    BearerToken(String),
    Anonymous,
}

impl GoogleAuth {
    /// Prefers a bearer token over an API key when both are configured.
    pub fn from_parts(api_key: Option<String>, access_token: Option<String>) -> Self {
        match (access_token, api_key) {
            (Some(token), _) if !token.is_empty() => GoogleAuth::BearerToken(token),
            (_, Some(key)) if !key.is_empty() => GoogleAuth::ApiKey(key),
            _ => GoogleAuth::Anonymous,
        }
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            GoogleAuth::ApiKey(key) => request.query(&[("key", key.as_str())]),
            GoogleAuth::BearerToken(token) => request.bearer_auth(token),
            GoogleAuth::Anonymous => request,
        }
    }
}

impl fmt::Debug for GoogleAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoogleAuth::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
            GoogleAuth::BearerToken(_) => f.write_str("BearerToken([REDACTED])"),
            GoogleAuth::Anonymous => f.write_str("Anonymous"),
        }
    }
}
