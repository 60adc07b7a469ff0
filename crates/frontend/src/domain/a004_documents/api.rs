use contracts::domain::a004_documents::{Document, ReviewDocumentDto};
use serde_json::Value;

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_documents(client: &ApiClient) -> Result<Vec<Document>, ApiError> {
    client
        .get::<Option<Vec<Document>>>(Backend::Provider, "/documents")
        .await
        .map(Option::unwrap_or_default)
}

/// Approves or rejects a KYC document; rejections carry a reason.
pub async fn review_document(
    client: &ApiClient,
    id: &str,
    dto: &ReviewDocumentDto,
) -> Result<(), ApiError> {
    client
        .patch::<Value, _>(
            Backend::Provider,
            &format!("/documents/{}/review", urlencoding::encode(id)),
            dto,
        )
        .await
        .map(|_| ())
}
