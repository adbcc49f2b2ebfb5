//! Compatibility shim for the double-encoded login response.
//!
//! The `/login` route serializes its JSON array into a string and then
//! serializes that string again, so the body on the wire looks like
//! `"[{\"idUsuario\":7,...}]"`. This is a server-side defect; the decode is
//! kept here so it can be dropped in one place once the server sends plain
//! JSON. A body that is already structured after the first pass is accepted
//! unchanged.

use serde_json::Value;

use crate::error::AuthError;

/// Decode a body that may be a JSON document wrapped in a JSON string literal.
///
/// # Errors
///
/// Returns `AuthError::InvalidResponse` if either decoding pass fails.
pub fn decode_double_encoded(body: &str) -> Result<Value, AuthError> {
    let outer: Value = serde_json::from_str(body)
        .map_err(|e| AuthError::InvalidResponse(format!("outer JSON: {e}")))?;

    match outer {
        Value::String(inner) => serde_json::from_str(&inner)
            .map_err(|e| AuthError::InvalidResponse(format!("inner JSON: {e}"))),
        structured => {
            tracing::debug!("login body was single-encoded; accepting as-is");
            Ok(structured)
        }
    }
}
