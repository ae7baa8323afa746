//! Transport-agnostic boundary operations and response envelopes.
//!
//! Callers (a CLI, an HTTP handler, a test) hand in a raw JSON payload and
//! get back either a success envelope or an [`EngineError`] they can render
//! as an [`ErrorResponse`]. There are no partial envelopes: a request
//! either scores every task or scores none.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::config::ScoringPolicy;
use crate::error::{EngineError, Result};
use crate::normalize;
use crate::rank::{self, ScoredTask};
use crate::strategy::{Strategy, StrategyInfo};
use crate::suggest::{self, Recommendation};
use crate::task::Task;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Envelope for the analyze operation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    /// Key of the strategy that produced the ordering.
    pub strategy: &'static str,
    pub total_tasks: usize,
    pub tasks: Vec<ScoredTask>,
}

/// Envelope for the suggest operation.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub status: &'static str,
    pub summary: String,
    pub top_tasks: Vec<Recommendation>,
    pub total_analyzed: usize,
}

/// Envelope for the strategies listing.
#[derive(Debug, Clone, Serialize)]
pub struct StrategiesResponse {
    pub status: &'static str,
    pub strategies: Vec<StrategyInfo>,
}

/// Envelope for any failed operation.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

impl From<&EngineError> for ErrorResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            status: STATUS_ERROR,
            error: err.to_string(),
        }
    }
}

/// Parse a payload into normalized tasks.
///
/// Accepts a JSON array of task objects or a single task object (wrapped
/// into a one-element list). Any other container shape is rejected;
/// malformed fields inside a task are normalized away, never rejected.
pub fn parse_tasks(payload: &str) -> Result<Vec<Task>> {
    let value: Value = serde_json::from_str(payload).map_err(|e| EngineError::InvalidPayload {
        message: format!("invalid JSON: {e}"),
    })?;

    let raw_tasks = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => {
            return Err(EngineError::InvalidPayload {
                message: "expected a task object or an array of tasks".to_string(),
            })
        }
    };

    Ok(raw_tasks
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize::normalize(raw, i))
        .collect())
}

/// Resolve a strategy key against the policy.
///
/// `None` means the policy default. An unknown key is an error only under
/// strict parsing; otherwise it silently falls back to the default.
pub fn resolve_strategy(key: Option<&str>, policy: &ScoringPolicy) -> Result<Strategy> {
    match key {
        None => Ok(policy.default_strategy),
        Some(k) => match Strategy::from_key(k) {
            Some(strategy) => Ok(strategy),
            None if policy.strict_strategy => Err(EngineError::UnknownStrategy {
                key: k.to_string(),
            }),
            None => Ok(policy.default_strategy),
        },
    }
}

/// Analyze: normalize, score, classify, and rank a task payload.
///
/// An empty task list is a success with an empty ranked sequence.
pub fn analyze(
    payload: &str,
    strategy_key: Option<&str>,
    today: NaiveDate,
    policy: &ScoringPolicy,
) -> Result<AnalyzeResponse> {
    let strategy = resolve_strategy(strategy_key, policy)?;
    let tasks = parse_tasks(payload)?;
    let ranked = rank::rank(tasks, strategy, today, policy);
    Ok(AnalyzeResponse {
        status: STATUS_SUCCESS,
        strategy: strategy.key(),
        total_tasks: ranked.len(),
        tasks: ranked,
    })
}

/// Suggest: the top three tasks for today with reasons. Not
/// strategy-parameterized; always ranks under `SmartBalance`.
pub fn suggest(payload: &str, today: NaiveDate, policy: &ScoringPolicy) -> Result<SuggestResponse> {
    let tasks = parse_tasks(payload)?;
    let total_analyzed = tasks.len();
    let suggestion = suggest::suggest(tasks, today, policy)?;
    Ok(SuggestResponse {
        status: STATUS_SUCCESS,
        summary: suggestion.summary,
        top_tasks: suggestion.top_tasks,
        total_analyzed,
    })
}

/// The static strategies listing. No task processing.
pub fn strategies() -> StrategiesResponse {
    StrategiesResponse {
        status: STATUS_SUCCESS,
        strategies: Strategy::catalog(),
    }
}
