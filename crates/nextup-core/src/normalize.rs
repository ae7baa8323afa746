//! Lenient normalization of raw task records.
//!
//! The boundary accepts arbitrary JSON task objects; this module turns one
//! into a well-typed [`Task`] without ever failing. A field that is missing
//! or holds the wrong JSON type falls back to its default, so a single
//! malformed field never rejects the whole request. Unknown fields are
//! ignored.

use chrono::NaiveDate;
use serde_json::Value;

use crate::task::{DueDate, Task};

/// Default importance when the field is missing or unusable.
pub const DEFAULT_IMPORTANCE: i64 = 5;
/// Default effort estimate in hours.
pub const DEFAULT_HOURS: f64 = 1.0;
/// Title used when the input carries none.
pub const UNTITLED: &str = "(untitled)";

/// Normalize one raw task record.
///
/// `index` is the task's position in the request payload; it seeds the id
/// when the caller supplied none, keeping ids deterministic and scoped to
/// this request.
pub fn normalize(raw: &Value, index: usize) -> Task {
    Task {
        id: id_field(raw.get("id"), index),
        title: title_field(raw.get("title")),
        due_date: due_field(raw.get("due_date")),
        importance: int_field(raw.get("importance"))
            .unwrap_or(DEFAULT_IMPORTANCE)
            .clamp(1, 10),
        estimated_hours: hours_field(raw.get("estimated_hours")),
        dependencies: deps_field(raw.get("dependencies")),
    }
}

fn id_field(value: Option<&Value>, index: usize) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => (index + 1).to_string(),
    }
}

fn title_field(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => UNTITLED.to_string(),
    }
}

fn due_field(value: Option<&Value>) -> DueDate {
    value
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .map(DueDate::Known)
        .unwrap_or(DueDate::Unknown)
}

/// Integer extraction: integers pass through, floats truncate toward zero,
/// everything else (strings included) is rejected.
fn int_field(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

fn hours_field(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|hours| *hours > 0.0)
        .unwrap_or(DEFAULT_HOURS)
}

fn deps_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(dep_id).collect(),
        _ => Vec::new(),
    }
}

fn dep_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
