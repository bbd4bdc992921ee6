//! GET and POST entry points.
//!
//! Every call builds its own client, sends one request, drains the response
//! body and drops the client before returning. Blocking variants use
//! `reqwest::blocking` and must not be called from inside an async runtime.

use super::body::{encode_json, encode_json_compressed, EncodedBody};
use super::headers::inject_headers;
use super::types::{HeaderParameters, WorkerResponse};
use crate::error::{Result, WorkerError};
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::json;
use tracing::Span;
use url::Url;

/// Timeout applied to blocking POST requests in debug builds only.
#[cfg(debug_assertions)]
const DEBUG_POST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Stateless helper for JSON-over-HTTP requests.
///
/// Holds only immutable configuration: the span that parents its log events
/// and a set of default headers that caller-supplied headers never override.
#[derive(Debug, Clone)]
pub struct RequestWorker {
    span: Span,
    default_headers: HeaderMap,
}

impl Default for RequestWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestWorker {
    pub fn new() -> Self {
        Self {
            span: tracing::info_span!("request_worker"),
            default_headers: HeaderMap::new(),
        }
    }

    /// Parents all log events emitted by this worker under `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Headers sent with every request. Caller-supplied headers with the
    /// same name are skipped.
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sends a GET request, blocking the current thread.
    pub fn get(&self, url: &str, headers: Option<&HeaderParameters>) -> Result<WorkerResponse> {
        validate_url(url)?;
        self.blocking_get(url, headers)
            .inspect_err(|e| self.log_failure("GET", url, headers, e))
    }

    /// Sends a GET request.
    pub async fn get_async(
        &self,
        url: &str,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse> {
        validate_url(url)?;
        self.send_get(url, headers)
            .await
            .inspect_err(|e| self.log_failure("GET", url, headers, e))
    }

    /// Sends a POST request with an optional JSON body, blocking the current
    /// thread.
    ///
    /// Debug builds limit this call to five seconds. No other entry point
    /// overrides the client's default timeout.
    pub fn post<B>(
        &self,
        url: &str,
        body: Option<&B>,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse>
    where
        B: Serialize + ?Sized,
    {
        validate_url(url)?;
        body.map(encode_json)
            .transpose()
            .and_then(|body| self.blocking_post(url, body, headers))
            .inspect_err(|e| self.log_failure("POST", url, headers, e))
    }

    /// Sends a POST request with an optional JSON body.
    pub async fn post_async<B>(
        &self,
        url: &str,
        body: Option<&B>,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse>
    where
        B: Serialize + ?Sized,
    {
        validate_url(url)?;
        let result = match body.map(encode_json).transpose() {
            Ok(body) => self.send_post(url, body, headers).await,
            Err(e) => Err(e),
        };
        result.inspect_err(|e| self.log_failure("POST", url, headers, e))
    }

    /// Sends a POST request whose JSON body is gzip-compressed and marked
    /// with `Content-Encoding: gzip`.
    ///
    /// Meant for large payloads. The receiver must decode the body itself.
    pub async fn post_by_compress_async<B>(
        &self,
        url: &str,
        body: Option<&B>,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse>
    where
        B: Serialize + ?Sized,
    {
        validate_url(url)?;
        let result = match body.map(encode_json_compressed).transpose() {
            Ok(body) => self.send_post(url, body, headers).await,
            Err(e) => Err(e),
        };
        result.inspect_err(|e| self.log_failure("POST", url, headers, e))
    }

    fn client_headers(&self, headers: Option<&HeaderParameters>) -> Result<HeaderMap> {
        let mut merged = self.default_headers.clone();
        inject_headers(&mut merged, headers)?;
        Ok(merged)
    }

    fn blocking_get(&self, url: &str, headers: Option<&HeaderParameters>) -> Result<WorkerResponse> {
        let target = parse_target(url)?;
        let client = reqwest::blocking::Client::builder()
            .default_headers(self.client_headers(headers)?)
            .build()?;

        let response = client.get(target).send()?;
        self.log_completed("GET", url, response.status().as_u16());
        read_blocking(response)
    }

    async fn send_get(
        &self,
        url: &str,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse> {
        let target = parse_target(url)?;
        let client = reqwest::Client::builder()
            .default_headers(self.client_headers(headers)?)
            .build()?;

        let response = client.get(target).send().await?;
        self.log_completed("GET", url, response.status().as_u16());
        read_async(response).await
    }

    fn blocking_post(
        &self,
        url: &str,
        body: Option<EncodedBody>,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse> {
        let target = parse_target(url)?;
        #[allow(unused_mut)]
        let mut builder =
            reqwest::blocking::Client::builder().default_headers(self.client_headers(headers)?);
        #[cfg(debug_assertions)]
        {
            builder = builder.timeout(DEBUG_POST_TIMEOUT);
        }
        let client = builder.build()?;

        let mut request = client.post(target);
        if let Some(body) = body {
            request = request.headers(body.headers()).body(body.bytes);
        }

        let response = request.send()?;
        self.log_completed("POST", url, response.status().as_u16());
        read_blocking(response)
    }

    async fn send_post(
        &self,
        url: &str,
        body: Option<EncodedBody>,
        headers: Option<&HeaderParameters>,
    ) -> Result<WorkerResponse> {
        let target = parse_target(url)?;
        let client = reqwest::Client::builder()
            .default_headers(self.client_headers(headers)?)
            .build()?;

        let mut request = client.post(target);
        if let Some(body) = body {
            request = request.headers(body.headers()).body(body.bytes);
        }

        let response = request.send().await?;
        self.log_completed("POST", url, response.status().as_u16());
        read_async(response).await
    }

    fn log_completed(&self, method: &str, url: &str, status: u16) {
        tracing::debug!(parent: &self.span, method, url = %url, status, "Request completed");
    }

    fn log_failure(
        &self,
        method: &str,
        url: &str,
        headers: Option<&HeaderParameters>,
        error: &WorkerError,
    ) {
        let params = json!({ "url": url, "headerParameters": headers });
        tracing::error!(
            parent: &self.span,
            method,
            code = error.code(),
            error = %error,
            params = %params,
            "Request failed"
        );
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(WorkerError::InvalidArgument(
            "url must not be blank".to_string(),
        ));
    }
    Ok(())
}

fn parse_target(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|e| WorkerError::InvalidUrl(format!("{}: {}", url, e)))
}

fn read_blocking(response: reqwest::blocking::Response) -> Result<WorkerResponse> {
    let status = response.status();
    let version = response.version();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();
    let body = response.bytes()?.to_vec();
    Ok(WorkerResponse::new(status, version, final_url, headers, body))
}

async fn read_async(response: reqwest::Response) -> Result<WorkerResponse> {
    let status = response.status();
    let version = response.version();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    Ok(WorkerResponse::new(status, version, final_url, headers, body))
}
