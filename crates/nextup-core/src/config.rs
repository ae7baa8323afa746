//! Scoring policy configuration.
//!
//! The engine's policy knobs live in one small value with sensible
//! defaults; callers may load overrides from a TOML document:
//!
//! ```toml
//! [scoring]
//! unknown_due_urgency = 15
//!
//! [strategy]
//! strict = false
//! default = "smart_balance"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::strategy::Strategy;

/// Engine policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Urgency contribution for tasks with no usable due date.
    pub unknown_due_urgency: i64,
    /// When true, unknown strategy keys are an error instead of a fallback.
    pub strict_strategy: bool,
    /// Strategy used when the caller supplies none (or an unknown key in
    /// non-strict mode).
    pub default_strategy: Strategy,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            unknown_due_urgency: 15,
            strict_strategy: false,
            default_strategy: Strategy::SmartBalance,
        }
    }
}

impl ScoringPolicy {
    /// Parse a policy from a TOML document. Missing sections and keys keep
    /// their defaults; an unknown default-strategy key is an error.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: PolicyFile =
            toml::from_str(input).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        let default_strategy = match &file.strategy.default {
            Some(key) => Strategy::from_key(key).ok_or_else(|| ConfigError::InvalidValue {
                key: "strategy.default".to_string(),
                message: format!("unknown strategy '{key}'"),
            })?,
            None => Strategy::SmartBalance,
        };

        Ok(Self {
            unknown_due_urgency: file.scoring.unknown_due_urgency,
            strict_strategy: file.strategy.strict,
            default_strategy,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    scoring: ScoringSection,
    #[serde(default)]
    strategy: StrategySection,
}

#[derive(Debug, Deserialize)]
struct ScoringSection {
    #[serde(default = "default_unknown_due_urgency")]
    unknown_due_urgency: i64,
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            unknown_due_urgency: default_unknown_due_urgency(),
        }
    }
}

fn default_unknown_due_urgency() -> i64 {
    15
}

#[derive(Debug, Default, Deserialize)]
struct StrategySection {
    #[serde(default)]
    strict: bool,
    #[serde(default)]
    default: Option<String>,
}
