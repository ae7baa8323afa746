//! Priority levels and score explanations.
//!
//! Maps a numeric score onto a discrete level and renders a short,
//! deterministic justification from the dominant contributions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::score::ScoreBreakdown;
use crate::task::Task;

/// Discrete priority level, derived from the score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl PriorityLevel {
    /// Classify a score. Total over all integers; highest band wins.
    pub fn from_score(score: i64) -> Self {
        if score >= 100 {
            PriorityLevel::Critical
        } else if score >= 70 {
            PriorityLevel::High
        } else if score >= 40 {
            PriorityLevel::Medium
        } else if score >= 20 {
            PriorityLevel::Low
        } else {
            PriorityLevel::Minimal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityLevel::Critical => "CRITICAL",
            PriorityLevel::High => "HIGH",
            PriorityLevel::Medium => "MEDIUM",
            PriorityLevel::Low => "LOW",
            PriorityLevel::Minimal => "MINIMAL",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the human-readable justification for a scored task.
///
/// Deterministic given the same task and breakdown: a level/score header
/// followed by the markers that apply, in a fixed order (date situation,
/// importance, effort).
pub fn explain(task: &Task, breakdown: &ScoreBreakdown) -> String {
    let level = PriorityLevel::from_score(breakdown.total);
    let mut markers: Vec<String> = Vec::new();

    match breakdown.days_until {
        Some(d) if d < 0 => markers.push(format!("overdue by {} day{}", -d, plural(-d))),
        Some(0) => markers.push("due today".to_string()),
        Some(d) if d <= 3 => markers.push(format!("due in {} day{}", d, plural(d))),
        Some(_) => {}
        None => markers.push("date unclear".to_string()),
    }

    if task.importance >= 8 {
        markers.push(format!("very important ({}/10)", task.importance));
    } else if task.importance >= 6 {
        markers.push(format!("important ({}/10)", task.importance));
    }

    if task.estimated_hours <= 1.0 {
        markers.push("quick win (<=1h)".to_string());
    } else if task.estimated_hours <= 2.0 {
        markers.push("fast task (<=2h)".to_string());
    }

    let mut text = format!("Priority: {} (score {})", level, breakdown.total);
    if !markers.is_empty() {
        text.push_str(" - ");
        text.push_str(&markers.join(", "));
    }
    text
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
