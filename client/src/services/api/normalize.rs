//! # Response Normalizer
//!
//! The backend answers successful calls in several shapes. Each parsed 2xx
//! body is classified into exactly one [`ResponseShape`] and then folded
//! into an [`ApiResponse`]. Classification is first-match-wins:
//!
//! 1. `success` plus `message` or `data` → [`ResponseShape::Enveloped`]
//! 2. `items`, `total`, `page`, `size`, `pages` → [`ResponseShape::Paginated`]
//! 3. `id` → [`ResponseShape::SingleResource`]
//! 4. JSON array → [`ResponseShape::Array`]
//! 5. anything else → [`ResponseShape::Primitive`]
//!
//! A paginated page is wrapped whole (not just its `items`), and an envelope
//! whose `data` happens to hold an `id` stays an envelope.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::{ApiResponse, DEFAULT_SUCCESS_MESSAGE};

use super::request::Validation;
use crate::core::error::{ApiError, ApiResult};

const PAGINATION_KEYS: [&str; 5] = ["items", "total", "page", "size", "pages"];

/// Recognised shapes of a successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    Enveloped(Map<String, Value>),
    Paginated(Map<String, Value>),
    SingleResource(Map<String, Value>),
    Array(Vec<Value>),
    Primitive(Value),
}

impl ResponseShape {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(map) if is_envelope(&map) => ResponseShape::Enveloped(map),
            Value::Object(map) if PAGINATION_KEYS.iter().all(|k| map.contains_key(*k)) => {
                ResponseShape::Paginated(map)
            }
            Value::Object(map) if map.contains_key("id") => ResponseShape::SingleResource(map),
            Value::Array(items) => ResponseShape::Array(items),
            other => ResponseShape::Primitive(other),
        }
    }

    /// Fold the shape into the uniform envelope.
    pub fn into_envelope(self) -> ApiResponse<Value> {
        match self {
            ResponseShape::Enveloped(map) => unwrap_envelope(map),
            ResponseShape::Paginated(map) | ResponseShape::SingleResource(map) => {
                ApiResponse::ok(Value::Object(map))
            }
            ResponseShape::Array(items) => ApiResponse::ok(Value::Array(items)),
            ResponseShape::Primitive(value) => ApiResponse::ok(value),
        }
    }
}

/// Normalize a parsed 2xx body. `header_trace_id` fills `trace_id` when the
/// body does not carry one.
pub fn normalize(body: Value, header_trace_id: Option<&str>) -> ApiResponse<Value> {
    let mut envelope = ResponseShape::classify(body).into_envelope();
    if envelope.trace_id.is_none() {
        envelope.trace_id = header_trace_id.map(str::to_string);
    }
    envelope
}

/// Decode the envelope payload into `T`.
///
/// A `null` payload decodes as no data. On mismatch the call fails with
/// [`ApiError::Validation`] carrying the original payload when validation is
/// strict (`Always`, or `Default` with `development`) and the envelope
/// reports success. Otherwise the envelope comes back with `data: None`,
/// logged unless validation is `Never`.
pub fn decode<T: DeserializeOwned>(
    envelope: ApiResponse<Value>,
    validation: Validation,
    development: bool,
) -> ApiResult<ApiResponse<T>> {
    let ApiResponse { success, message, data, errors, trace_id } = envelope;
    let strict = success
        && match validation {
            Validation::Always => true,
            Validation::Default => development,
            Validation::Never => false,
        };

    let data = match data {
        None | Some(Value::Null) => None,
        Some(payload) => match T::deserialize(&payload) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                let expected = std::any::type_name::<T>();
                if validation != Validation::Never {
                    tracing::error!(
                        expected = expected,
                        error = %err,
                        payload = %payload,
                        trace_id = trace_id.as_deref().unwrap_or("-"),
                        strict = strict,
                        "Response payload does not match expected type"
                    );
                }
                if strict {
                    return Err(ApiError::Validation {
                        message: format!("expected {expected}: {err}"),
                        details: vec![err.to_string()],
                        payload,
                    });
                }
                None
            }
        },
    };

    Ok(ApiResponse { success, message, data, errors, trace_id })
}

fn is_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key("success") && (map.contains_key("message") || map.contains_key("data"))
}

fn unwrap_envelope(mut map: Map<String, Value>) -> ApiResponse<Value> {
    let success = map.get("success").map(truthy).unwrap_or(false);
    let message = match map.remove("message") {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => DEFAULT_SUCCESS_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    };
    let data = map.remove("data");
    let errors = match map.remove("errors") {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        Some(Value::String(single)) => Some(vec![single]),
        _ => None,
    };
    let trace_id = match map.remove("trace_id") {
        Some(Value::String(s)) => Some(s),
        _ => None,
    };

    ApiResponse { success, message, data, errors, trace_id }
}

/// Loose truthiness for `success` fields that are not booleans.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
