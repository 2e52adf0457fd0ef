//! Query-string parameter encoding.
//!
//! The committed strategy for [`Task::Parameters`](crate::endpoint::Task) is
//! a URL-safe query string appended to the request's existing query — never a
//! serialized body. The encoder mutates the in-progress request in place and
//! touches no other state.

use serde_json::Value;

use crate::endpoint::Parameters;
use crate::error::NetworkError;

/// Append `parameters` to the request's query string.
///
/// Fails with [`NetworkError::ParameterEncodingFailed`] on the first value
/// that has no query-string representation; the request is left untouched in
/// that case.
pub fn encode(parameters: &Parameters, request: &mut reqwest::Request) -> Result<(), NetworkError> {
    if parameters.is_empty() {
        return Ok(());
    }

    let mut rendered = Vec::with_capacity(parameters.len());
    for (key, value) in parameters {
        let text = render(value).ok_or_else(|| NetworkError::ParameterEncodingFailed {
            key: key.clone(),
        })?;
        rendered.push((key, text));
    }

    let mut pairs = request.url_mut().query_pairs_mut();
    for (key, text) in rendered {
        pairs.append_pair(key, &text);
    }
    pairs.finish();
    Ok(())
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // No scalar rendering exists for these.
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
