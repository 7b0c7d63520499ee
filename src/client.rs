use crate::config::DEFAULT_BASE_URL;
use crate::error::{ErrorContext, LarcError};
use crate::progress::Progress;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

/// HTTP methods the remote API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

/// A single API request, built per call and discarded after it returns.
///
/// Parameter placement (header vs. body field) varies per endpoint and is
/// dictated by the remote contract; the catalog in [`crate::ops`] reproduces
/// it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Map<String, Value>>,
}

impl Request {
    pub fn post(path: &'static str) -> Self {
        Self {
            method: Method::Post,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.body
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }
}

/// A raw API response: status code plus unparsed body bytes
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Authenticated client for the archival API.
///
/// Every request carries exactly one `apikey` header holding the configured
/// credential, even when the credential is empty; rejecting an empty key is
/// the server's job. No timeout is enforced and nothing is ever retried.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Create a client against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Create a client against a specific endpoint
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("larc/0.1.0")
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Issue a request, painting the elapsed-time indicator on stderr while
    /// the call is outstanding.
    ///
    /// Returns the status and full body for any HTTP status the server
    /// produces; only transport-level failures (serialization, connection,
    /// body read) are errors, and they are fatal to the invoking command.
    pub async fn execute(&self, request: Request) -> Result<Response, LarcError> {
        let progress = Progress::start();
        let result = self.send(request).await;
        progress.finish().await;
        result
    }

    async fn send(&self, request: Request) -> Result<Response, LarcError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.api_key)
                .larc_transport_err("Invalid API key header value")?,
        );

        // Request headers replace any default of the same name
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .larc_transport_err(format!("Invalid header name '{name}'"))?;
            let header_value = HeaderValue::from_str(value)
                .larc_transport_err(format!("Invalid value for header '{name}'"))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = match request.method {
            Method::Post => self.http.post(&url),
        }
        .headers(headers);

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder
            .send()
            .await
            .larc_transport_err(format!("Failed to send request to {url}"))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .larc_transport_err("Failed to read response body")?;

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}
