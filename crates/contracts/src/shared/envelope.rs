//! Response envelope returned by every MedBankr backend.
//!
//! The backends disagree on how success is reported: the core API answers
//! `{"status": "success", ...}` while the provider and blog services answer
//! `{"status": true, ...}`. `ApiEnvelope` accepts both so callers never
//! special-case a host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `status` member of an envelope, either flavour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeStatus {
    Flag(bool),
    Text(String),
}

impl EnvelopeStatus {
    pub fn is_success(&self) -> bool {
        match self {
            EnvelopeStatus::Flag(flag) => *flag,
            EnvelopeStatus::Text(text) => {
                let text = text.trim();
                text.eq_ignore_ascii_case("success") || text.eq_ignore_ascii_case("true")
            }
        }
    }
}

/// `{status, data, message}` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    #[serde(default)]
    pub status: Option<EnvelopeStatus>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A well-formed envelope that reports failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeFailure {
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Some(EnvelopeStatus::Text("success".to_string())),
            data: Some(data),
            message: None,
        }
    }

    /// A missing `status` counts as failure.
    pub fn is_success(&self) -> bool {
        self.status
            .as_ref()
            .map(EnvelopeStatus::is_success)
            .unwrap_or(false)
    }

    /// Unwraps the payload. `Ok(None)` is a successful envelope without `data`
    /// (typical for delete endpoints).
    pub fn into_result(self) -> Result<Option<T>, EnvelopeFailure> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(EnvelopeFailure {
                message: self.message.filter(|m| !m.trim().is_empty()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiEnvelope {
        serde_json::from_str(json).expect("valid envelope")
    }

    #[test]
    fn test_string_and_bool_status_are_both_success() {
        assert!(parse(r#"{"status":"success","data":[]}"#).is_success());
        assert!(parse(r#"{"status":"SUCCESS","data":[]}"#).is_success());
        assert!(parse(r#"{"status":true,"data":{}}"#).is_success());
    }

    #[test]
    fn test_failure_statuses() {
        assert!(!parse(r#"{"status":"error","message":"nope"}"#).is_success());
        assert!(!parse(r#"{"status":false}"#).is_success());
        assert!(!parse(r#"{"data":[1,2]}"#).is_success());
    }

    #[test]
    fn test_into_result_keeps_backend_message() {
        let failure = parse(r#"{"status":false,"message":"Email already exists"}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message.as_deref(), Some("Email already exists"));

        let blank = parse(r#"{"status":"failed","message":"  "}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(blank.message, None);
    }

    #[test]
    fn test_into_result_without_data() {
        let data = parse(r#"{"status":"success","message":"Deleted"}"#)
            .into_result()
            .unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_typed_payload() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"status":true,"data":[3,4]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), Some(vec![3, 4]));
    }
}
