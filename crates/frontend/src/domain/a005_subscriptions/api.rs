use contracts::domain::a005_subscriptions::{
    CreatePlanDto, Subscription, SubscriptionPlan, VerifyPaymentDto,
};
use serde_json::Value;

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_subscriptions(client: &ApiClient) -> Result<Vec<Subscription>, ApiError> {
    client
        .get::<Option<Vec<Subscription>>>(Backend::Core, "/subscriptions")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn fetch_plans(client: &ApiClient) -> Result<Vec<SubscriptionPlan>, ApiError> {
    client
        .get::<Option<Vec<SubscriptionPlan>>>(Backend::Core, "/subscriptions/plans")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn create_plan(client: &ApiClient, dto: &CreatePlanDto) -> Result<(), ApiError> {
    client
        .post::<Value, _>(Backend::Core, "/subscriptions/plans", dto)
        .await
        .map(|_| ())
}

/// Confirms a checkout reference with the backend, which activates the plan.
pub async fn verify_payment(client: &ApiClient, dto: &VerifyPaymentDto) -> Result<(), ApiError> {
    client
        .post::<Value, _>(Backend::Core, "/subscriptions/verify", dto)
        .await
        .map(|_| ())
}
