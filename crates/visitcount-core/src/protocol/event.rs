//! Inbound invocation event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, VisitCountError};

/// Invocation event as delivered by the hosting environment.
///
/// Only `body` is read; any other fields the host attaches are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvocationEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<EventBody>,
}

/// The body arrives either still encoded or already decoded by the host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EventBody {
    /// JSON text that still needs decoding.
    Raw(String),
    /// Any JSON value the host decoded for us.
    Decoded(Value),
}

impl InvocationEvent {
    pub fn empty() -> Self {
        Self { body: None }
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self { body: Some(EventBody::Raw(body.into())) }
    }

    pub fn decoded(body: Value) -> Self {
        Self { body: Some(EventBody::Decoded(body)) }
    }

    /// Resolve the body union into a single mapping. An absent body is `{}`.
    pub fn request_body(&self) -> Result<RequestBody> {
        match &self.body {
            None => Ok(RequestBody::default()),
            Some(body) => body.to_request_body(),
        }
    }
}

impl EventBody {
    fn to_request_body(&self) -> Result<RequestBody> {
        let value = match self {
            EventBody::Raw(text) => serde_json::from_str::<Value>(text)
                .map_err(|e| VisitCountError::Unexpected(format!("invalid JSON body: {e}")))?,
            EventBody::Decoded(value) => value.clone(),
        };

        match value {
            Value::Object(fields) => Ok(RequestBody { fields }),
            other => Err(VisitCountError::Unexpected(format!(
                "request body must be a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }
}

/// Decoded request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// The `path` field as requested by the caller.
    ///
    /// Absent yields `None`. `null` counts as an empty path.
    pub fn requested_path(&self) -> Result<Option<&str>> {
        match self.fields.get("path") {
            None => Ok(None),
            Some(Value::Null) => Ok(Some("")),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(VisitCountError::Unexpected(format!(
                "path must be a string, got {}",
                type_name(other)
            ))),
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use serde_json::json;

    fn event(v: Value) -> InvocationEvent {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn body_union_is_resolved_from_json() {
        assert_eq!(event(json!({})).body, None);
        assert_eq!(event(json!({"body": null})).body, None);
        assert_eq!(event(json!({"body": "{}"})).body, Some(EventBody::Raw("{}".into())));
        assert_eq!(
            event(json!({"body": {"path": "/contact"}})).body,
            Some(EventBody::Decoded(json!({"path": "/contact"})))
        );
    }

    #[test]
    fn host_fields_are_ignored() {
        let ev = event(json!({"body": "{}", "headers": {"x": "y"}, "requestContext": {}}));
        assert!(ev.request_body().unwrap().requested_path().unwrap().is_none());
    }

    #[test]
    fn raw_and_decoded_bodies_agree() {
        let raw = InvocationEvent::raw(r#"{"path": "/about"}"#);
        let decoded = InvocationEvent::decoded(json!({"path": "/about"}));
        assert_eq!(raw.request_body().unwrap(), decoded.request_body().unwrap());
        assert_eq!(raw.request_body().unwrap().requested_path().unwrap(), Some("/about"));
    }

    #[test]
    fn absent_body_is_an_empty_mapping() {
        let body = InvocationEvent::empty().request_body().unwrap();
        assert_eq!(body.requested_path().unwrap(), None);
    }

    #[test]
    fn null_path_is_empty() {
        let body = InvocationEvent::decoded(json!({"path": null})).request_body().unwrap();
        assert_eq!(body.requested_path().unwrap(), Some(""));
    }

    #[test]
    fn malformed_bodies_are_unexpected() {
        for ev in [
            InvocationEvent::raw("{not json"),
            InvocationEvent::raw(""),
            InvocationEvent::raw("[1, 2]"),
            InvocationEvent::decoded(json!(17)),
        ] {
            let err = ev.request_body().unwrap_err();
            assert!(matches!(err, VisitCountError::Unexpected(_)), "{err:?}");
        }
    }

    #[test]
    fn non_string_path_is_unexpected() {
        let body = InvocationEvent::decoded(json!({"path": 5})).request_body().unwrap();
        let err = body.requested_path().unwrap_err();
        assert_eq!(err.to_string(), "path must be a string, got number");
    }
}
