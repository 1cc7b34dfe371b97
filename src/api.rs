//! HTTP calls for the feedback and review pages.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both surface as [`ApiError`];
//! callers turn them into a one-line message. Nothing here retries, and
//! nothing here touches the points ledger.

use loyalty::ErrorCode;
use loyalty::feedback::Feedback;
use loyalty::reviews::{Review, search_filter};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("response body is not JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "E_HTTP",
            Self::Status { .. } => "E_HTTP_STATUS",
            Self::InvalidBody(_) => "E_HTTP_BODY",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base_url: String,
    reviews_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Use a preconfigured HTTP client (proxy, TLS or timeout settings).
    #[must_use]
    pub fn with_http(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_base_url: config.api_base_url.clone(),
            reviews_url: config.reviews_url.clone(),
        }
    }

    /// `POST {api_base}/feedbacks` with the feedback as JSON; returns the
    /// created record as echoed by the server, or `null` for an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, or a
    /// non-empty body that is not JSON.
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<Value, ApiError> {
        let url = feedback_endpoint(&self.api_base_url);
        debug!(%url, restaurant = feedback.restaurant_name(), "submitting feedback");
        let response = self
            .http
            .post(&url)
            .headers(request_headers())
            .json(feedback)
            .send()
            .await?;
        let response = check_status(response).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET {reviews_url}`, filtered by `restaurantName_like` when `search`
    /// is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, or a body
    /// that is not a JSON array of reviews.
    pub async fn fetch_reviews(&self, search: Option<&str>) -> Result<Vec<Review>, ApiError> {
        let mut request = self.http.get(&self.reviews_url).headers(request_headers());
        if let Some(q) = search.and_then(search_filter) {
            request = request.query(&[("restaurantName_like", q)]);
        }
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<Vec<Review>>().await?)
    }
}

fn feedback_endpoint(api_base_url: &str) -> String {
    format!("{}/feedbacks", api_base_url.trim_end_matches('/'))
}

fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    headers
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), body = %body_snippet(&body), "request rejected");
    Err(ApiError::Status { status: status.as_u16(), body })
}

fn body_snippet(body: &str) -> &str {
    const MAX: usize = 120;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
