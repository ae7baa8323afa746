//! Task types for the prioritization engine.
//!
//! A [`Task`] is the normalized unit of work the scorer operates on. It is
//! built fresh from each request payload, annotated with derived fields by
//! the ranking engine, and discarded with the response; nothing here is
//! retained between calls.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Due date with an explicit sentinel for absent or unparseable dates.
///
/// Serializes as a plain `YYYY-MM-DD` string or `null`, so the wire shape
/// matches the raw input field. Ordering places every known date before
/// `Unknown`, which is what the ranking tie-break relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Known(NaiveDate),
    Unknown,
}

impl DueDate {
    /// Days between today and the due date (negative = overdue).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        match self {
            DueDate::Known(date) => Some((*date - today).num_days()),
            DueDate::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DueDate::Known(_))
    }
}

impl Default for DueDate {
    fn default() -> Self {
        DueDate::Unknown
    }
}

impl Ord for DueDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DueDate::Known(a), DueDate::Known(b)) => a.cmp(b),
            (DueDate::Known(_), DueDate::Unknown) => Ordering::Less,
            (DueDate::Unknown, DueDate::Known(_)) => Ordering::Greater,
            (DueDate::Unknown, DueDate::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DueDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for DueDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DueDate::Known(date) => serializer.serialize_some(date),
            DueDate::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NaiveDate>::deserialize(deserializer)? {
            Some(date) => DueDate::Known(date),
            None => DueDate::Unknown,
        })
    }
}

/// A normalized task.
///
/// Invariants (established by the normalizer, assumed by the scorer):
/// `title` is non-empty, `importance` is within 1-10, `estimated_hours`
/// is positive, and `id` is unique enough for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Request-scoped identifier, caller-supplied or filled from input position.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: DueDate,
    /// 1-10, higher means more important.
    pub importance: i64,
    /// Hours of estimated effort.
    pub estimated_hours: f64,
    /// Ids of tasks this task depends on. Cycles and dangling references
    /// are allowed; scoring only consults emptiness.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: DueDate::Unknown,
            importance: 5,
            estimated_hours: 1.0,
            dependencies: Vec::new(),
        }
    }

    pub fn with_due(mut self, date: NaiveDate) -> Self {
        self.due_date = DueDate::Known(date);
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}
