//! Dashboard API payloads.

use crate::model::ApiRecord;

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ApiListResponse {
    #[serde(default)]
    pub apis: Vec<ApiEntry>,

    /// Total page count as reported by the dashboard. Informational only;
    /// an empty page is what ends pagination.
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ApiEntry {
    pub api_definition: ApiDefinition,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ApiDefinition {
    #[serde(default)]
    pub api_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub proxy: Proxy,

    #[serde(default)]
    pub version_data: VersionData,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Proxy {
    #[serde(default)]
    pub listen_path: String,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct VersionData {
    #[serde(default)]
    pub default_version: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct StatusMessage {
    #[serde(default, rename = "Status")]
    pub status: String,

    #[serde(default, rename = "Message")]
    pub message: String,
}

impl From<ApiDefinition> for ApiRecord {
    fn from(def: ApiDefinition) -> Self {
        ApiRecord {
            id: def.api_id,
            name: def.name,
            listen_path: def.proxy.listen_path,
            default_version: def.version_data.default_version,
        }
    }
}

impl ApiListResponse {
    pub fn records(self) -> Vec<ApiRecord> {
        self.apis
            .into_iter()
            .map(|e| ApiRecord::from(e.api_definition))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
