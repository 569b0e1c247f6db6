//! # Response Body Handling
//!
//! Reads raw bodies into JSON values and resolves human-readable error
//! messages for non-2xx responses.

use serde_json::Value;

use super::request::HttpResponse;
use crate::core::error::{ApiError, ApiResult};

/// Fields checked, in order, for a server-supplied error message.
const MESSAGE_FIELDS: [&str; 4] = ["detail", "error", "message", "title"];

/// Parse a response body.
///
/// JSON content types must parse (an empty body reads as `null`). Anything
/// else is tried as JSON and otherwise kept as a string.
pub fn read_body(response: &HttpResponse) -> ApiResult<Value> {
    let declared_json = response
        .content_type()
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    if declared_json {
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let text = String::from_utf8_lossy(&response.body).into_owned();
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

/// Best server-supplied explanation in the body, if any.
///
/// A structured `detail`/`error`/`message`/`title` string wins; a
/// validation-style `detail` list is joined by its `msg` entries; a
/// non-empty plain-text body is used as is.
pub fn server_message(payload: &Value) -> Option<String> {
    match payload {
        Value::Object(map) => MESSAGE_FIELDS.iter().find_map(|field| match map.get(*field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Array(items)) if *field == "detail" => join_detail_list(items),
            _ => None,
        }),
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Message for a failed response: server message, then status text, then
/// `HTTP {status}`.
pub fn error_message(payload: &Value, status: u16, status_text: &str) -> String {
    server_message(payload)
        .or_else(|| {
            let text = status_text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Message for a 429 response.
pub fn rate_limit_message(payload: &Value) -> String {
    match server_message(payload) {
        Some(detail) => format!("Rate limit exceeded: {detail}"),
        None => "Rate limit exceeded. Please try again later.".to_string(),
    }
}

fn join_detail_list(items: &[Value]) -> Option<String> {
    let messages: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Object(obj) => obj.get("msg").and_then(Value::as_str).map(str::to_string),
            _ => None,
        })
        .collect();
    (!messages.is_empty()).then(|| messages.join("; "))
}
