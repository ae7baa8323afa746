//! Suggestion selection: the top tasks to work on next, with reasons.
//!
//! Suggestions always rank under `SmartBalance`; the work-style strategies
//! only apply to the full analyze operation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ScoringPolicy;
use crate::error::{EngineError, Result};
use crate::rank::{rank, ScoredTask};
use crate::strategy::Strategy;
use crate::task::Task;

/// Maximum number of suggested tasks.
pub const MAX_SUGGESTIONS: usize = 3;

/// One suggested task with its 1-based rank and rationale.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub rank: usize,
    pub task: ScoredTask,
    pub reason: String,
}

/// The suggestion result: a summary line plus up to three picks.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub summary: String,
    pub top_tasks: Vec<Recommendation>,
}

/// Pick the top `min(3, N)` tasks. Zero tasks is an error; everything else
/// succeeds.
pub fn suggest(tasks: Vec<Task>, today: NaiveDate, policy: &ScoringPolicy) -> Result<Suggestion> {
    if tasks.is_empty() {
        return Err(EngineError::NothingToSuggest);
    }

    let ranked = rank(tasks, Strategy::SmartBalance, today, policy);
    let top_tasks: Vec<Recommendation> = ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .enumerate()
        .map(|(i, task)| {
            let rank = i + 1;
            let reason = format!("Rank #{}: {}", rank, task.explanation);
            Recommendation { rank, task, reason }
        })
        .collect();

    let first = &top_tasks[0];
    let mut summary = format!(
        "Today's Focus: Start with '{}' ({} priority)",
        first.task.task.title, first.task.priority_level
    );
    if let Some(second) = top_tasks.get(1) {
        summary.push_str(&format!(", then '{}'", second.task.task.title));
    }

    Ok(Suggestion { summary, top_tasks })
}
