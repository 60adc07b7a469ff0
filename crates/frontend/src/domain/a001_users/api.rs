use contracts::domain::a001_users::{UpdateUserDto, User, UserStatusDto};

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

fn user_path(id: &str) -> String {
    format!("/users/{}", urlencoding::encode(id))
}

pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client
        .get::<Option<Vec<User>>>(Backend::Core, "/users")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn update_user(client: &ApiClient, id: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
    client
        .put::<serde_json::Value, _>(Backend::Core, &user_path(id), dto)
        .await
        .map(|_| ())
}

/// Activate / deactivate.
pub async fn set_user_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    let dto = UserStatusDto {
        status: status.to_string(),
    };
    client
        .patch::<serde_json::Value, _>(Backend::Core, &format!("{}/status", user_path(id)), &dto)
        .await
        .map(|_| ())
}

pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(Backend::Core, &user_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_path_is_encoded() {
        assert_eq!(user_path("abc123"), "/users/abc123");
        assert_eq!(user_path("a/b"), "/users/a%2Fb");
    }
}
