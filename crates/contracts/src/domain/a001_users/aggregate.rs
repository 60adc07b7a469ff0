use serde::{Deserialize, Serialize};

/// Patient account registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub subscription: Option<UserSubscription>,
}

/// Plan summary nested inside a user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn plan_name(&self) -> Option<&str> {
        self.subscription.as_ref()?.plan_name.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusDto {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let json = r#"{
            "_id": "64f1",
            "firstName": "Chioma",
            "lastName": "Eze",
            "email": "chioma@example.com",
            "status": "active",
            "subscription": {"planName": "Family", "status": "active"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64f1");
        assert_eq!(user.full_name(), "Chioma Eze");
        assert_eq!(user.plan_name(), Some("Family"));
        assert_eq!(user.phone, None);
    }
}
