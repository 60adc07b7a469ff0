use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError, Method};

/// `POST /auth/login`; no token required.
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    client
        .request_public(Method::Post, Backend::Core, "/auth/login", Some(&request))
        .await
}

/// Validates a stored token and returns who it belongs to.
pub async fn current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get(Backend::Core, "/auth/me").await
}
