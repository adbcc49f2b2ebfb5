//! Mapping of the server's login record onto [`User`].
//!
//! Server field names: `idUsuario`, `Token`, `Nome`, `Apelido`, `Email`,
//! `Companhia`, `Login`, `Roles`.

use helpme_core::{DEFAULT_ROLE, User};
use serde_json::Value;

use crate::error::AuthError;

/// Token value the server uses to signal rejected credentials.
const REJECTED_TOKEN: &str = "0";

/// Build a [`User`] from the decoded login payload (an array of records).
///
/// An empty or non-array payload, a token of `"0"`, or a missing user id all
/// mean the credentials were not accepted.
pub(crate) fn user_from_payload(payload: &Value) -> Result<User, AuthError> {
    let record = payload
        .as_array()
        .and_then(|rows| rows.first())
        .ok_or_else(AuthError::invalid_credentials)?;

    let token = text(record, "Token");
    if token.as_deref() == Some(REJECTED_TOKEN) {
        return Err(AuthError::invalid_credentials());
    }

    let id = user_id(record.get("idUsuario")).ok_or_else(AuthError::invalid_credentials)?;
    let nickname = text(record, "Apelido");

    Ok(User {
        id,
        name: text(record, "Nome")
            .or_else(|| nickname.clone())
            .unwrap_or_default(),
        email: text(record, "Email").unwrap_or_default(),
        token: token.unwrap_or_default(),
        // Absent optional fields stay `None` and are omitted from the stored record.
        company: text(record, "Companhia"),
        login: text(record, "Login"),
        nickname,
        roles: roles(record.get("Roles")),
    })
}

/// Non-empty string (or number) field rendered as text.
fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `idUsuario` arrives as a number; zero, empty and null count as missing.
fn user_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn roles(value: Option<&Value>) -> Vec<String> {
    let roles: Vec<String> = match value {
        Some(Value::String(role)) if !role.is_empty() => vec![role.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if roles.is_empty() {
        vec![DEFAULT_ROLE.to_string()]
    } else {
        roles
    }
}
