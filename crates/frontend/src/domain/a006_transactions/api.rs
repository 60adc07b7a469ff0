use contracts::domain::a006_transactions::Transaction;

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_transactions(client: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    client
        .get::<Option<Vec<Transaction>>>(Backend::Core, "/transactions")
        .await
        .map(Option::unwrap_or_default)
}
