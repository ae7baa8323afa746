//! Sorting strategies: named weighting policies over the scoring families.
//!
//! The strategy set is closed. Each variant carries its weight table via
//! exhaustive matching, so adding a strategy is a compile-time-checked
//! change rather than a string-keyed lookup.

use serde::{Deserialize, Serialize};

/// Percentage multipliers applied to the four contribution families.
///
/// 100 means "as the base formula"; the combination bonus is not weighted
/// (it is already a function of two families).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyWeights {
    pub urgency: i64,
    pub importance: i64,
    pub effort: i64,
    pub dependency: i64,
}

/// A caller-selectable work-style policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced scoring across all factors (the base formula).
    SmartBalance,
    /// Amplify the quick-win effort bonus, damp urgency.
    FastestWins,
    /// Importance dominates; urgency and effort are damped.
    HighImpact,
    /// Urgency dominates; importance and effort are damped.
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    pub fn weights(self) -> StrategyWeights {
        match self {
            Strategy::SmartBalance => StrategyWeights {
                urgency: 100,
                importance: 100,
                effort: 100,
                dependency: 100,
            },
            Strategy::FastestWins => StrategyWeights {
                urgency: 50,
                importance: 100,
                effort: 300,
                dependency: 100,
            },
            Strategy::HighImpact => StrategyWeights {
                urgency: 40,
                importance: 250,
                effort: 40,
                dependency: 100,
            },
            Strategy::DeadlineDriven => StrategyWeights {
                urgency: 250,
                importance: 50,
                effort: 50,
                dependency: 100,
            },
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Smart Balance",
            Strategy::FastestWins => "Fastest Wins",
            Strategy::HighImpact => "High Impact",
            Strategy::DeadlineDriven => "Deadline Driven",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Balanced algorithm considering all factors",
            Strategy::FastestWins => "Prioritize low-effort tasks for quick completion",
            Strategy::HighImpact => "Prioritize importance over everything",
            Strategy::DeadlineDriven => "Prioritize based on due date urgency",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Static metadata for the strategies listing operation.
    pub fn catalog() -> Vec<StrategyInfo> {
        Self::ALL
            .into_iter()
            .map(|s| StrategyInfo {
                key: s.key(),
                name: s.display_name(),
                description: s.description(),
            })
            .collect()
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SmartBalance
    }
}

/// One entry of the strategies listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_key(strategy.key()), Some(strategy));
        }
        assert_eq!(Strategy::from_key("does_not_exist"), None);
    }

    #[test]
    fn smart_balance_is_the_identity_weighting() {
        let w = Strategy::SmartBalance.weights();
        assert_eq!((w.urgency, w.importance, w.effort, w.dependency), (100, 100, 100, 100));
    }

    #[test]
    fn profiles_emphasize_their_family() {
        let base = Strategy::SmartBalance.weights();
        assert!(Strategy::FastestWins.weights().effort > base.effort);
        assert!(Strategy::FastestWins.weights().urgency < base.urgency);
        assert!(Strategy::HighImpact.weights().importance > base.importance);
        assert!(Strategy::DeadlineDriven.weights().urgency > base.urgency);
    }

    #[test]
    fn catalog_lists_every_strategy_once() {
        let catalog = Strategy::catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].key, "smart_balance");
        for (info, strategy) in catalog.iter().zip(Strategy::ALL) {
            assert_eq!(info.key, strategy.key());
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn strategy_serializes_as_snake_case_key() {
        let json = serde_json::to_string(&Strategy::DeadlineDriven).unwrap();
        assert_eq!(json, "\"deadline_driven\"");
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::DeadlineDriven);
    }
}
