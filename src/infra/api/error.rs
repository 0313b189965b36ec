//! Review API error types.

use reqwest::StatusCode;
use thiserror::Error;

pub const ERROR_BAD_REQUEST: &str = "请求参数错误";
pub const ERROR_FORBIDDEN: &str = "没有操作权限";
pub const ERROR_NOT_FOUND: &str = "请求的资源不存在";
pub const ERROR_INTERNAL: &str = "服务器内部错误";
pub const ERROR_NETWORK: &str = "网络请求超时，请检查您的网络连接";
pub const ERROR_UNKNOWN: &str = "未知错误";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", ERROR_BAD_REQUEST)]
    BadRequest,

    #[error("{}", ERROR_FORBIDDEN)]
    Forbidden,

    #[error("{}", ERROR_NOT_FOUND)]
    NotFound,

    #[error("{}", ERROR_INTERNAL)]
    InternalServerError,

    /// Non-2xx status without a fixed message; carries the server's text.
    #[error("{message}")]
    Other { status: u16, message: String },

    /// The request never reached the server (connection refused, DNS, timeout).
    #[error("{}", ERROR_NETWORK)]
    Network(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid server endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Auth token contains characters not allowed in a header")]
    InvalidToken,

    #[error("Invalid JSON in response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("{}", ERROR_UNKNOWN)]
    Unknown,
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status the server answered with, if the failure came from one.
    pub fn status(&self) -> Option<StatusCode> {
        let code = match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::Other { status, .. } => *status,
            _ => return None,
        };
        StatusCode::from_u16(code).ok()
    }

    /// Whether a transport error means the server could not be reached.
    pub(crate) fn is_network_failure(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout() || err.is_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bad_request(ApiError::BadRequest, ERROR_BAD_REQUEST)]
    #[case::forbidden(ApiError::Forbidden, ERROR_FORBIDDEN)]
    #[case::not_found(ApiError::NotFound, ERROR_NOT_FOUND)]
    #[case::internal(ApiError::InternalServerError, ERROR_INTERNAL)]
    #[case::unknown(ApiError::Unknown, ERROR_UNKNOWN)]
    fn test_fixed_messages(#[case] err: ApiError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_other_displays_server_message() {
        let err = ApiError::Other {
            status: 409,
            message: "review already exists".to_string(),
        };
        assert_eq!(err.to_string(), "review already exists");
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    }

    #[test]
    fn test_unexpected_shape_message() {
        let err = ApiError::UnexpectedShape("`data` should be an array, got \"x\"".to_string());
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: `data` should be an array, got \"x\""
        );
        assert_eq!(err.status(), None);
    }

    #[rstest]
    #[case::bad_request(ApiError::BadRequest, Some(400))]
    #[case::internal(ApiError::InternalServerError, Some(500))]
    #[case::token(ApiError::InvalidToken, None)]
    #[case::unknown(ApiError::Unknown, None)]
    fn test_status(#[case] err: ApiError, #[case] expected: Option<u16>) {
        assert_eq!(err.status().map(|s| s.as_u16()), expected);
    }
}
