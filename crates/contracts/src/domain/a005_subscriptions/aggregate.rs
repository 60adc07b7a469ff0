use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub plan: Option<SubscriptionPlan>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Subscription {
    pub fn plan_name(&self) -> Option<&str> {
        self.plan.as_ref().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    pub name: String,
    pub amount: f64,
    pub interval: String,
    pub description: Option<String>,
}

/// Sent after the checkout widget reports a completed charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentDto {
    pub reference: String,
    pub plan_id: String,
    pub email: String,
}
