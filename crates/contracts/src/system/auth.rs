use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "token", alias = "access_token")]
    pub access_token: String,
    pub user: UserInfo,
}

/// Identity of the signed-in staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if full.trim().is_empty() {
            self.email.clone()
        } else {
            full
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case("super_admin") || r.eq_ignore_ascii_case("superadmin"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_token_alias() {
        let json = r#"{"token":"abc","user":{"_id":"u1","email":"a@b.c","role":"super_admin"}}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.user.id, "u1");
        assert!(parsed.user.is_super_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo {
            id: "1".into(),
            email: "ops@medbankr.com".into(),
            first_name: None,
            last_name: None,
            role: None,
        };
        assert_eq!(user.display_name(), "ops@medbankr.com");
        user.first_name = Some("Ada".into());
        user.last_name = Some("Obi".into());
        assert_eq!(user.display_name(), "Ada Obi");
    }
}
