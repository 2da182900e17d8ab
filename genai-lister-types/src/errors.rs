use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Google RPC 错误信封 `{"error": {...}}`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorStatus,
}

/// RPC 错误详情。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiErrorStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Value>,
}

impl ApiErrorStatus {
    /// `google.rpc.ErrorInfo` 中的 reason 列表。
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.details
            .iter()
            .filter_map(|detail| detail.get("reason").and_then(Value::as_str))
    }

    /// 是否携带指定 reason。
    #[must_use]
    pub fn has_reason(&self, reason: &str) -> bool {
        self.reasons().any(|value| value == reason)
    }
}
