use contracts::domain::a002_providers::{Provider, UpdateProviderDto};
use serde_json::{json, Value};

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

fn provider_path(id: &str) -> String {
    format!("/providers/{}", urlencoding::encode(id))
}

pub async fn fetch_providers(client: &ApiClient) -> Result<Vec<Provider>, ApiError> {
    client
        .get::<Option<Vec<Provider>>>(Backend::Provider, "/providers")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn update_provider(
    client: &ApiClient,
    id: &str,
    dto: &UpdateProviderDto,
) -> Result<(), ApiError> {
    client
        .put::<Value, _>(Backend::Provider, &provider_path(id), dto)
        .await
        .map(|_| ())
}

/// Marks the provider as verified after KYC review.
pub async fn verify_provider(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .patch::<Value, _>(
            Backend::Provider,
            &format!("{}/verify", provider_path(id)),
            &json!({ "verified": true }),
        )
        .await
        .map(|_| ())
}

pub async fn delete_provider(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(Backend::Provider, &provider_path(id)).await
}
