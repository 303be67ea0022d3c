use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Failure of a single transport-client call.
///
/// `Status` keeps the raw HTTP status so the weather error-translation
/// policy can inspect it; its display form is the uniform
/// `"HTTP Error: <status> <reason>"` message.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP Error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl HttpError {
    /// HTTP status of the failed response, if this failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Minimal GET client over one base URL.
///
/// One outbound call per invocation; no retries, no caching, no response
/// validation beyond JSON deserialization into the caller's type.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// Issue a GET to `path` (relative to the base URL) with `params`
    /// serialized into the query string. `Option` values serialize only when
    /// `Some`, so optional parameters are omitted rather than sent empty.
    pub async fn get<T, P>(&self, path: &str, params: &P) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let res = self.http.get(&url).query(params).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(res.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i64,
    }

    #[tokio::test]
    async fn get_deserializes_a_successful_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.json"))
            .and(query_param("q", "London"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": 42
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri());
        let payload: Payload = client
            .get("/data.json", &[("q", "London"), ("key", "test-key")])
            .await
            .expect("request must succeed");

        assert_eq!(payload.value, 42);
    }

    #[tokio::test]
    async fn none_valued_params_are_omitted_from_the_query_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.json"))
            .and(query_param("q", "Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": 1
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri());
        let payload: Payload = client
            .get("/data.json", &[("q", Some("Paris")), ("hour", None::<&str>)])
            .await
            .expect("request must succeed");

        assert_eq!(payload.value, 1);

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("q=Paris"));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_the_uniform_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri());
        let err = client
            .get::<Payload, _>("/data.json", &[("key", "bad")])
            .await
            .expect_err("401 must fail");

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "HTTP Error: 401 Unauthorized");
    }
}
