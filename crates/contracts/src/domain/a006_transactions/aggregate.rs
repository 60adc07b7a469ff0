use serde::{Deserialize, Serialize};

/// Payment recorded by the billing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    pub reference: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_currency() -> String {
    "NGN".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_defaults_to_naira() {
        let tx: Transaction =
            serde_json::from_str(r#"{"id":"t1","reference":"MB-001","amount":2500}"#).unwrap();
        assert_eq!(tx.currency, "NGN");
        assert_eq!(tx.amount, 2500.0);
        assert_eq!(tx.status, "");
    }
}
