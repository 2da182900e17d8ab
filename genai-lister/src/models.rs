//! Models API surface.

use std::sync::Arc;

use genai_lister_types::models::{ListModelsResponse, ModelList};

use crate::client::ClientInner;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单次请求，不翻页、不重试、不缓存）。
    ///
    /// # Errors
    /// 凭据被拒返回 [`Error::Auth`]；网络失败返回 [`Error::HttpClient`]；
    /// 其他非 2xx 响应返回 [`Error::ApiError`]；响应体无法解析时返回
    /// [`Error::Serialization`]。
    pub async fn list(&self) -> Result<ModelList> {
        let response = self.list_response().await?;
        Ok(response.into())
    }

    /// 列出模型并保留原始响应信封（含 `nextPageToken`）。
    ///
    /// # Errors
    /// 同 [`Models::list`]。
    pub async fn list_response(&self) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner);
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::from_response(status.as_u16(), &body));
        }
        let bytes = response.bytes().await?;
        let result = serde_json::from_slice::<ListModelsResponse>(&bytes)?;
        tracing::debug!(count = result.models.len(), "listed models");
        Ok(result)
    }
}

fn build_models_list_url(inner: &ClientInner) -> String {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    format!("{base}{version}/models")
}
