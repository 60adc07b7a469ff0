use contracts::domain::a007_staff::{AssignRoleDto, InviteStaffDto, Role, Staff};
use serde_json::Value;

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

fn staff_path(id: &str) -> String {
    format!("/staff/{}", urlencoding::encode(id))
}

pub async fn fetch_staff(client: &ApiClient) -> Result<Vec<Staff>, ApiError> {
    client
        .get::<Option<Vec<Staff>>>(Backend::Core, "/staff")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn fetch_roles(client: &ApiClient) -> Result<Vec<Role>, ApiError> {
    client
        .get::<Option<Vec<Role>>>(Backend::Core, "/roles")
        .await
        .map(Option::unwrap_or_default)
}

/// Sends an invitation email; the account stays inactive until accepted.
pub async fn invite_staff(client: &ApiClient, dto: &InviteStaffDto) -> Result<(), ApiError> {
    client
        .post::<Value, _>(Backend::Core, "/staff/invite", dto)
        .await
        .map(|_| ())
}

pub async fn assign_role(client: &ApiClient, id: &str, role_id: &str) -> Result<(), ApiError> {
    let dto = AssignRoleDto {
        role_id: role_id.to_string(),
    };
    client
        .patch::<Value, _>(Backend::Core, &format!("{}/role", staff_path(id)), &dto)
        .await
        .map(|_| ())
}

pub async fn delete_staff(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(Backend::Core, &staff_path(id)).await
}
