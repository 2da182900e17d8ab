//! Error definitions for the lister.

use genai_lister_types::errors::ApiErrorBody;
use thiserror::Error;

/// 凭据被拒时服务端返回的 `google.rpc.ErrorInfo` reason。
const API_KEY_INVALID: &str = "API_KEY_INVALID";

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Auth error: {message}")]
    Auth {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// 凭据缺失、格式错误或被服务端拒绝。
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// 网络、超时或非 2xx 响应。
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::HttpClient { .. } | Self::ApiError { .. })
    }

    /// 按 HTTP 状态码与响应体归类失败响应。
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|parsed| parsed.error.message.clone())
            .unwrap_or_else(|| body.to_string());
        let key_rejected = parsed
            .as_ref()
            .is_some_and(|parsed| parsed.error.has_reason(API_KEY_INVALID));

        if matches!(status, 401 | 403) || key_rejected {
            Self::Auth {
                status: Some(status),
                message,
            }
        } else {
            Self::ApiError { status, message }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
