use std::fmt;

use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use crate::config::{ApiHosts, Backend};
use crate::system::auth::context::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// HTTP client bound to one session token.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    hosts: ApiHosts,
    token: Option<String>,
}

/// Client for the current session, built from context.
///
/// Reads the session untracked: the client is a snapshot for the requests
/// that are about to be issued, not a reactive dependency.
pub fn use_api() -> ApiClient {
    let hosts = use_context::<ApiHosts>().unwrap_or_default();
    let (auth_state, _) = use_auth();
    let token = auth_state.with_untracked(|s| s.session.as_ref().map(|s| s.token.clone()));
    ApiClient::new(hosts, token)
}

impl ApiClient {
    pub fn new(hosts: ApiHosts, token: Option<String>) -> Self {
        Self { hosts, token }
    }

    /// Client for endpoints that need no session (login).
    pub fn anonymous(hosts: ApiHosts) -> Self {
        Self { hosts, token: None }
    }

    pub fn hosts(&self) -> &ApiHosts {
        &self.hosts
    }

    pub fn url(&self, backend: Backend, path: &str) -> String {
        self.hosts.url(backend, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(format!("Bearer {}", token)),
            _ => Err(ApiError::Unauthenticated),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, backend: Backend, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::Get, backend, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        backend: Backend,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::Post, backend, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        backend: Backend,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::Put, backend, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        backend: Backend,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::Patch, backend, path, Some(body)).await
    }

    /// Deletes ignore whatever `data` the backend sends back.
    pub async fn delete(&self, backend: Backend, path: &str) -> Result<(), ApiError> {
        self.request::<Value, ()>(Method::Delete, backend, path, None)
            .await
            .map(|_| ())
    }

    /// Authenticated request. Fails with `Unauthenticated` before touching
    /// the network when there is no token.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        backend: Backend,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let bearer = match self.bearer() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("{} {} skipped: no session token", method, path);
                return Err(e);
            }
        };
        self.send(method, backend, path, body, Some(bearer)).await
    }

    /// Request without an `Authorization` header.
    pub async fn request_public<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        backend: Backend,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        self.send(method, backend, path, body, None).await
    }

    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        backend: Backend,
        path: &str,
        body: Option<&B>,
        bearer: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.url(backend, path);
        log::debug!("{} {}", method, url);

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(bearer) = bearer.as_deref() {
            builder = builder.header("Authorization", bearer);
        }

        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let result = decode_response(status, &text);
        if let Err(e) = &result {
            log::error!("{} {} failed: {}", method, url, e);
        }
        result
    }
}

/// Turns a raw HTTP answer into the payload or an [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthenticated);
    }

    let envelope = if body.trim().is_empty() {
        Err("empty body".to_string())
    } else {
        serde_json::from_str::<ApiEnvelope>(body).map_err(|e| e.to_string())
    };

    if !(200..300).contains(&status) {
        let message = envelope
            .ok()
            .and_then(|env| env.message)
            .filter(|m| !m.trim().is_empty());
        return Err(match message {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Http { status },
        });
    }

    let envelope = envelope.map_err(ApiError::Decode)?;
    match envelope.into_result() {
        Ok(data) => serde_json::from_value(data.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(e.to_string())),
        Err(failure) => Err(match failure.message {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Http { status },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_decode_both_envelope_flavours() {
        let a: Vec<Item> =
            decode_response(200, r#"{"status":"success","data":[{"id":"1"}]}"#).unwrap();
        let b: Vec<Item> = decode_response(200, r#"{"status":true,"data":[{"id":"1"}]}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_missing_data_as_unit() {
        let unit: Result<(), _> = decode_response(200, r#"{"status":"success","message":"Deleted"}"#);
        assert!(unit.is_ok());
    }

    #[test]
    fn test_unauthorized_status() {
        let r: Result<Value, _> = decode_response(401, r#"{"status":false,"message":"jwt expired"}"#);
        assert_eq!(r, Err(ApiError::Unauthenticated));
    }

    #[test]
    fn test_backend_message_is_kept() {
        let r: Result<Value, _> =
            decode_response(400, r#"{"status":"error","message":"Plan name is required"}"#);
        assert_eq!(
            r,
            Err(ApiError::Rejected { status: 400, message: "Plan name is required".into() })
        );

        let r: Result<Value, _> = decode_response(200, r#"{"status":false,"message":"Not allowed"}"#);
        assert_eq!(r, Err(ApiError::Rejected { status: 200, message: "Not allowed".into() }));
    }

    #[test]
    fn test_http_error_without_message() {
        let r: Result<Value, _> = decode_response(502, "<html>Bad gateway</html>");
        assert_eq!(r, Err(ApiError::Http { status: 502 }));
    }

    #[test]
    fn test_malformed_success_body() {
        let r: Result<Value, _> = decode_response(200, "ok");
        assert!(matches!(r, Err(ApiError::Decode(_))));

        let r: Result<Vec<Item>, _> = decode_response(200, r#"{"status":true,"data":{"id":1}}"#);
        assert!(matches!(r, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_request_without_token_is_unauthenticated() {
        let client = ApiClient::anonymous(ApiHosts::default());
        assert_eq!(client.bearer(), Err(ApiError::Unauthenticated));
        let client = ApiClient::new(ApiHosts::default(), Some("t0k".into()));
        assert_eq!(client.bearer().unwrap(), "Bearer t0k");
    }
}
