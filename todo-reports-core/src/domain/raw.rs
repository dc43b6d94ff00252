//! Records as delivered by the todos and users endpoints
//!
//! Every field is optional and decoding never fails on a single field: a
//! missing key, an explicit `null` and a value of an unusable type all
//! decode to `None`, and callers decide which absences matter.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// A user record from the users endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_company")]
    pub company: Option<RawCompany>,
}

/// Nested company info; only the name is used
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCompany {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl RawUser {
    /// Company name, if both the company object and its name are present
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.name.as_deref())
    }
}

/// A task record from the todos endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTask {
    #[serde(default, rename = "userId", deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub completed: Option<bool>,
}

impl RawTask {
    /// Absent `completed` counts as not completed
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

/// Integer ids only; `"1"` and `1.5` do not match a numeric id
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(value.as_i64())
}

/// Strings as-is, numbers as their decimal text, anything else absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(Some(s)),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// JSON truthiness: zero, `""`, empty arrays and objects are false
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => return Ok(None),
        JsonValue::Bool(b) => b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    };
    Ok(Some(flag))
}

/// A company that is not an object counts as no company
fn lenient_company<'de, D>(deserializer: D) -> Result<Option<RawCompany>, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        value @ JsonValue::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}
