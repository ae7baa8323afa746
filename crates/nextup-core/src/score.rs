//! Composite task scoring.
//!
//! Score is built from five contributions:
//!
//! 1. Urgency (due date proximity, the dominant factor)
//! 2. Importance (user-defined 1-10 scale, x8)
//! 3. Effort (quick wins get a bonus, long tasks a penalty)
//! 4. Dependency (dependency-free tasks are easier to start)
//! 5. Combination bonuses (overdue+important, quick+important)
//!
//! A [`Strategy`] re-weights the first four families with percentage
//! multipliers; `SmartBalance` is the identity weighting, so the base
//! formula holds exactly under it. The result is a single integer, rounded
//! once at the end and deliberately unbounded in both directions: a badly
//! overdue task keeps climbing, a huge task can go negative.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ScoringPolicy;
use crate::strategy::Strategy;
use crate::task::{DueDate, Task};

/// Urgency contribution for a due date relative to today.
///
/// Overdue tasks start at 100 and gain 10 per day overdue, uncapped; the
/// longer a task is overdue, the more it dominates ranking. Future tasks
/// step down through fixed tiers, then decay by week with a floor at 0.
pub fn urgency(due: DueDate, today: NaiveDate, policy: &ScoringPolicy) -> i64 {
    let Some(days_until) = due.days_until(today) else {
        return policy.unknown_due_urgency;
    };

    if days_until < 0 {
        100 + 10 * -days_until
    } else if days_until == 0 {
        80
    } else if days_until <= 1 {
        60
    } else if days_until <= 3 {
        40
    } else if days_until <= 7 {
        20
    } else {
        (10 - days_until / 7).max(0)
    }
}

/// Effort contribution: bonus for quick wins, unbounded penalty past 4h.
pub fn effort_bonus(hours: f64) -> f64 {
    if hours <= 1.0 {
        15.0
    } else if hours <= 2.0 {
        10.0
    } else if hours <= 4.0 {
        5.0
    } else {
        -2.0 * (hours - 4.0)
    }
}

/// Combination bonuses. Additive and independent; both may apply.
pub fn combo_bonus(task: &Task, days_until: Option<i64>) -> i64 {
    let overdue = days_until.map_or(false, |d| d < 0);
    let mut bonus = 0;
    if overdue && task.importance >= 8 {
        bonus += 25;
    }
    if task.estimated_hours <= 2.0 && task.importance >= 8 {
        bonus += 10;
    }
    bonus
}

/// Per-family contributions for one task under one strategy.
///
/// The raw values are pre-weighting; `total` is the weighted, rounded
/// score. The explanation builder and tests read this rather than
/// recomputing pieces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub days_until: Option<i64>,
    pub urgency: i64,
    pub importance: i64,
    pub effort: f64,
    pub dependency: i64,
    pub combo: i64,
    pub total: i64,
}

/// Score one task, keeping the per-family breakdown.
pub fn breakdown(
    task: &Task,
    strategy: Strategy,
    today: NaiveDate,
    policy: &ScoringPolicy,
) -> ScoreBreakdown {
    let days_until = task.due_date.days_until(today);
    let urgency = urgency(task.due_date, today, policy);
    let importance = task.importance * 8;
    let effort = effort_bonus(task.estimated_hours);
    let dependency = if task.dependencies.is_empty() { 5 } else { 0 };
    let combo = combo_bonus(task, days_until);

    let weights = strategy.weights();
    let weighted = (urgency * weights.urgency
        + importance * weights.importance
        + dependency * weights.dependency) as f64
        + effort * weights.effort as f64;
    // One rounding step, half away from zero. Under the identity weighting
    // this reproduces plain integer addition.
    let total = (weighted / 100.0 + combo as f64).round() as i64;

    ScoreBreakdown {
        days_until,
        urgency,
        importance,
        effort,
        dependency,
        combo,
        total,
    }
}

/// Score one task. Pure function of its inputs.
pub fn score(task: &Task, strategy: Strategy, today: NaiveDate, policy: &ScoringPolicy) -> i64 {
    breakdown(task, strategy, today, policy).total
}
