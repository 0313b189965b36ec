//! REST client for the review endpoints.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, Result};
use crate::models::Review;
use crate::shared::cookie::CookieJar;

/// Filter value meaning "no filter" for the reviewer listing.
pub const FILTER_ANY: &str = "-1";

const DEFAULT_LIMIT: u32 = 20;

/// Per-call request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestProps {
    /// API base URL, e.g. "https://example.com/api".
    pub server_endpoint: String,
}

impl RequestProps {
    pub fn new(server_endpoint: impl Into<String>) -> Self {
        Self {
            server_endpoint: server_endpoint.into(),
        }
    }
}

/// Decision sent when updating a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReview {
    /// `true` approves, `false` rejects.
    pub state: bool,
    pub comment: String,
}

/// Pagination and filters for [`ReviewClient::list_by_reviewer_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerFilter {
    pub offset: u32,
    pub limit: u32,
    /// Accepted for API compatibility but not sent: the server has no such parameter.
    pub kind: String,
    /// Review state code, or [`FILTER_ANY`].
    pub state: String,
}

impl Default for ReviewerFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            kind: FILTER_ANY.to_string(),
            state: FILTER_ANY.to_string(),
        }
    }
}

/// Which statuses get a fixed message, and where the fallback text lives.
struct StatusMapping {
    fixed: &'static [StatusCode],
    message_key: &'static str,
}

const REVIEW_MAPPING: StatusMapping = StatusMapping {
    fixed: &[
        StatusCode::BAD_REQUEST,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ],
    message_key: "error",
};

// Creation only special-cases 500; 400/403/404 surface the server's text.
const CREATE_MAPPING: StatusMapping = StatusMapping {
    fixed: &[StatusCode::INTERNAL_SERVER_ERROR],
    message_key: "error",
};

const ASSIGNED_MAPPING: StatusMapping = StatusMapping {
    fixed: &[StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR],
    message_key: "message",
};

impl StatusMapping {
    fn to_error(&self, status: StatusCode, body: &Value) -> ApiError {
        if self.fixed.contains(&status) {
            match status {
                StatusCode::BAD_REQUEST => return ApiError::BadRequest,
                StatusCode::FORBIDDEN => return ApiError::Forbidden,
                StatusCode::NOT_FOUND => return ApiError::NotFound,
                StatusCode::INTERNAL_SERVER_ERROR => return ApiError::InternalServerError,
                _ => {}
            }
        }

        match body.get(self.message_key).and_then(Value::as_str) {
            Some(message) if !message.is_empty() => ApiError::Other {
                status: status.as_u16(),
                message: message.to_string(),
            },
            _ => ApiError::Unknown,
        }
    }
}

/// Client for the review API.
///
/// The auth token is read from the cookie jar on every request and sent
/// verbatim as the `Authorization` header.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    cookies: CookieJar,
}

impl ReviewClient {
    pub fn new(cookies: CookieJar) -> Self {
        Self::with_http_client(reqwest::Client::new(), cookies)
    }

    pub fn with_http_client(http: reqwest::Client, cookies: CookieJar) -> Self {
        Self { http, cookies }
    }

    /// List the reviews of an activity.
    ///
    /// Returns the response body as-is; convert with [`Review::from_json_list`].
    pub async fn list(&self, activity_id: &str, props: &RequestProps) -> Result<Value> {
        let url = endpoint_url(props, &["activity", activity_id, "review"])?;
        tracing::debug!(%url, "sending request");
        let response = self.http.get(url.clone()).send().await?;
        read_json(response, &url, &REVIEW_MAPPING).await
    }

    /// Approve or reject a review.
    pub async fn update(
        &self,
        activity_id: &str,
        review_id: &str,
        data: &UpdateReview,
        props: &RequestProps,
    ) -> Result<Value> {
        let url = endpoint_url(props, &["activity", activity_id, "review", review_id])?;
        let request = self.authorized(Method::PUT, url.clone())?.json(data);
        let response = request.send().await?;
        read_json(response, &url, &REVIEW_MAPPING).await
    }

    /// Open a new review for an activity.
    pub async fn create(&self, activity_id: &str, props: &RequestProps) -> Result<Value> {
        let url = endpoint_url(props, &["activity", activity_id, "review", "new"])?;
        let request = self
            .authorized(Method::PUT, url.clone())?
            .header(CONTENT_TYPE, "application/json");
        let response = request.send().await?;
        read_json(response, &url, &CREATE_MAPPING).await
    }

    /// List activities awaiting the current reviewer, as provisional reviews.
    ///
    /// Unreachable servers produce [`ApiError::Network`] instead of a raw
    /// transport error.
    pub async fn list_by_reviewer_id(
        &self,
        filter: &ReviewerFilter,
        props: &RequestProps,
    ) -> Result<Vec<Review>> {
        let result = self.fetch_assigned(filter, props).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "failed to list assigned reviews");
        }
        result
    }

    async fn fetch_assigned(
        &self,
        filter: &ReviewerFilter,
        props: &RequestProps,
    ) -> Result<Vec<Review>> {
        let url = assigned_url(filter, props)?;
        let request = self.authorized(Method::GET, url.clone())?;
        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(network_error)?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(ASSIGNED_MAPPING.to_error(status, &body));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let body: Value = serde_json::from_slice(&bytes)?;
        reviews_from_activities(&body)
    }

    fn authorized(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token =
            HeaderValue::from_str(self.cookies.token()).map_err(|_| ApiError::InvalidToken)?;
        tracing::debug!(%method, %url, "sending request");
        Ok(self.http.request(method, url).header(AUTHORIZATION, token))
    }
}

/// Append path segments (percent-encoded) to the server endpoint.
fn endpoint_url(props: &RequestProps, segments: &[&str]) -> Result<Url> {
    let invalid = |reason: String| ApiError::InvalidEndpoint {
        endpoint: props.server_endpoint.clone(),
        reason,
    };

    let mut url = Url::parse(&props.server_endpoint).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn assigned_url(filter: &ReviewerFilter, props: &RequestProps) -> Result<Url> {
    let mut url = endpoint_url(props, &["activity"])?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("offset", &filter.offset.to_string())
            .append_pair("limit", &filter.limit.to_string());
        if filter.state != FILTER_ANY {
            query.append_pair("state", &filter.state);
        }
    }
    Ok(url)
}

/// Convert the `data` array of an activity listing into provisional reviews.
///
/// A missing or falsy `data` means nothing is assigned; any other non-array
/// value is an error.
fn reviews_from_activities(body: &Value) -> Result<Vec<Review>> {
    match body.get("data") {
        Some(Value::Array(activities)) => {
            Ok(activities.iter().map(Review::from_activity).collect())
        }
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Vec::new()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
        Some(Value::String(s)) if s.is_empty() => Ok(Vec::new()),
        Some(other) => Err(ApiError::UnexpectedShape(format!(
            "`data` should be an array, got {other}"
        ))),
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    if ApiError::is_network_failure(&err) {
        ApiError::Network(err)
    } else {
        ApiError::Transport(err)
    }
}

/// Return the JSON body of a 2xx response, or map the status to an error.
async fn read_json(response: Response, url: &Url, mapping: &StatusMapping) -> Result<Value> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }

    tracing::warn!(%url, status = status.as_u16(), "request failed");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Err(mapping.to_error(status, &body))
}
