use contracts::domain::a008_blog_posts::{Post, PostDto};
use serde_json::{json, Value};

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

fn post_path(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}

pub async fn fetch_posts(client: &ApiClient) -> Result<Vec<Post>, ApiError> {
    client
        .get::<Option<Vec<Post>>>(Backend::Blog, "/posts")
        .await
        .map(Option::unwrap_or_default)
}

pub async fn fetch_post(client: &ApiClient, id: &str) -> Result<Post, ApiError> {
    client.get(Backend::Blog, &post_path(id)).await
}

pub async fn create_post(client: &ApiClient, dto: &PostDto) -> Result<(), ApiError> {
    client
        .post::<Value, _>(Backend::Blog, "/posts", dto)
        .await
        .map(|_| ())
}

pub async fn update_post(client: &ApiClient, id: &str, dto: &PostDto) -> Result<(), ApiError> {
    client
        .put::<Value, _>(Backend::Blog, &post_path(id), dto)
        .await
        .map(|_| ())
}

/// Publish / unpublish.
pub async fn set_post_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    client
        .patch::<Value, _>(
            Backend::Blog,
            &format!("{}/status", post_path(id)),
            &json!({ "status": status }),
        )
        .await
        .map(|_| ())
}

pub async fn delete_post(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(Backend::Blog, &post_path(id)).await
}
