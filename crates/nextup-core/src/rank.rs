//! Ranking: annotate tasks with derived fields and order them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ScoringPolicy;
use crate::priority::{self, PriorityLevel};
use crate::score;
use crate::strategy::Strategy;
use crate::task::Task;

/// A task annotated with its derived priority fields.
///
/// Serializes flat: the task's own fields plus `priority_score`,
/// `priority_level`, and `explanation` at the same level, matching the
/// analyze response wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: i64,
    pub priority_level: PriorityLevel,
    pub explanation: String,
}

/// Score and classify one task under the given strategy.
pub fn annotate(task: Task, strategy: Strategy, today: NaiveDate, policy: &ScoringPolicy) -> ScoredTask {
    let breakdown = score::breakdown(&task, strategy, today, policy);
    let explanation = priority::explain(&task, &breakdown);
    ScoredTask {
        priority_score: breakdown.total,
        priority_level: PriorityLevel::from_score(breakdown.total),
        explanation,
        task,
    }
}

/// Rank tasks descending by score.
///
/// Ties break on earlier due date (unknown dates last), then input order.
/// Dependencies never reorder tasks; they only feed the score.
pub fn rank(
    tasks: Vec<Task>,
    strategy: Strategy,
    today: NaiveDate,
    policy: &ScoringPolicy,
) -> Vec<ScoredTask> {
    let mut ranked: Vec<ScoredTask> = tasks
        .into_iter()
        .map(|task| annotate(task, strategy, today, policy))
        .collect();
    // Stable sort: equal (score, due) pairs keep their input order.
    ranked.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| a.task.due_date.cmp(&b.task.due_date))
    });
    ranked
}
