use serde::{Deserialize, Serialize};

/// Verification document uploaded by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default, alias = "url")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDocumentDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
