//! Outbound invocation response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::VisitCountError;

pub const CORS_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Response handed back to the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// JSON-encoded payload.
    pub body: String,
}

/// Success payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisitBody {
    pub path: String,
    pub visit_count: u64,
}

/// Failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl InvocationResponse {
    /// 200 with CORS and content-type headers.
    pub fn visit(path: &str, visit_count: u64) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CORS_ALLOW_ORIGIN.to_string(), "*".to_string());
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            status_code: 200,
            headers: Some(headers),
            body: json!({ "path": path, "visit_count": visit_count }).to_string(),
        }
    }

    /// Error response; headers are only attached on success.
    pub fn error(err: &VisitCountError) -> Self {
        Self {
            status_code: err.status_code(),
            headers: None,
            body: json!({ "error": err.to_string() }).to_string(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.get(name).map(String::as_str)
    }
}
