use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 单个模型描述（服务端定义的结构，客户端不解析字段）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ModelDescriptor(Map<String, Value>);

impl ModelDescriptor {
    /// 按字段名读取原始值。
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// 以 JSON 对象形式访问全部字段。
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ModelDescriptor {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// 模型列表（保持服务端返回顺序，只读）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ModelList(Vec<ModelDescriptor>);

impl ModelList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按顺序遍历模型描述。
    pub fn iter(&self) -> std::slice::Iter<'_, ModelDescriptor> {
        self.0.iter()
    }
}

impl From<Vec<ModelDescriptor>> for ModelList {
    fn from(value: Vec<ModelDescriptor>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ModelList {
    type Item = ModelDescriptor;
    type IntoIter = std::vec::IntoIter<ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModelList {
    type Item = &'a ModelDescriptor;
    type IntoIter = std::slice::Iter<'a, ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `ListModels` 响应体。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub models: ModelList,
    /// 仅保留，不自动翻页。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<ModelList, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ModelList>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<ListModelsResponse> for ModelList {
    fn from(value: ListModelsResponse) -> Self {
        value.models
    }
}
