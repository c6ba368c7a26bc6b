//! Account roles.
//!
//! Roles are stored as free text. Registration falls back to [`EMPLOYEE`]
//! when the requested role is missing, empty or not a string, and otherwise
//! stores what the client sent.

use serde_json::Value;

pub const EMPLOYEE: &str = "employee";
pub const EMPLOYER: &str = "employer";

/// Role to persist for a registration request.
pub fn for_registration(requested: Option<&Value>) -> String {
    match requested.and_then(Value::as_str) {
        Some(role) if !role.is_empty() => role.to_string(),
        _ => EMPLOYEE.to_string(),
    }
}
