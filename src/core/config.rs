//! Simulator configuration.
//!
//! Hosts configure a session at construction time:
//! - Deal layout (guardian and starting hand sizes) and the START threshold
//! - Battle-log id policy across resets
//! - How the opponent's turn is driven
//!
//! Configs are plain serde data so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Whether battle-log ids restart when a match is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogIdPolicy {
    /// Ids keep counting across resets for the whole session.
    #[default]
    Session,
    /// Ids restart at zero on every reset.
    PerMatch,
}

/// How the opponent's draw step is triggered after the human ends a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnFlow {
    /// Ending the human turn runs the opponent step before returning.
    #[default]
    Immediate,
    /// Ending the human turn hands control to the opponent; the host runs
    /// the opponent step through `advance_turn`.
    Manual,
}

/// Complete simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Minimum main-deck total required to start a match.
    pub min_deck_size: u32,

    /// Cards dealt face down to the guardian zone.
    pub guardian_count: usize,

    /// Cards dealt to the starting hand.
    pub hand_size: usize,

    /// Battle-log id reset policy.
    pub log_ids: LogIdPolicy,

    /// Opponent turn driving mode.
    pub turn_flow: TurnFlow,

    /// Refresh rights and draw for the human as part of ending their turn.
    pub human_draws_at_turn_end: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_deck_size: 20,
            guardian_count: 4,
            hand_size: 6,
            log_ids: LogIdPolicy::Session,
            turn_flow: TurnFlow::Immediate,
            human_draws_at_turn_end: false,
        }
    }
}

impl SimulatorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the START threshold.
    #[must_use]
    pub fn with_min_deck_size(mut self, size: u32) -> Self {
        self.min_deck_size = size;
        self
    }

    /// Set the guardian and starting hand sizes.
    #[must_use]
    pub fn with_deal_layout(mut self, guardians: usize, hand: usize) -> Self {
        self.guardian_count = guardians;
        self.hand_size = hand;
        self
    }

    /// Set the battle-log id policy.
    #[must_use]
    pub fn with_log_ids(mut self, policy: LogIdPolicy) -> Self {
        self.log_ids = policy;
        self
    }

    /// Set the opponent turn driving mode.
    #[must_use]
    pub fn with_turn_flow(mut self, flow: TurnFlow) -> Self {
        self.turn_flow = flow;
        self
    }

    /// Draw for the human when their turn ends.
    #[must_use]
    pub fn with_human_draw_at_turn_end(mut self, enabled: bool) -> Self {
        self.human_draws_at_turn_end = enabled;
        self
    }

    /// Cards removed from a side's deck copy before the library is formed.
    #[must_use]
    pub fn dealt_before_library(&self) -> usize {
        self.guardian_count + self.hand_size
    }

    /// Check that every deck passing the START guard can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_deck_size == 0 {
            return Err(ConfigError::ZeroMinDeckSize);
        }
        let dealt = self.dealt_before_library();
        if dealt > self.min_deck_size as usize {
            return Err(ConfigError::DealExceedsMinimum {
                dealt,
                min_deck_size: self.min_deck_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();

        assert_eq!(config.min_deck_size, 20);
        assert_eq!(config.guardian_count, 4);
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.dealt_before_library(), 10);
        assert_eq!(config.log_ids, LogIdPolicy::Session);
        assert_eq!(config.turn_flow, TurnFlow::Immediate);
        assert!(!config.human_draws_at_turn_end);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimulatorConfig::new()
            .with_min_deck_size(30)
            .with_deal_layout(5, 7)
            .with_log_ids(LogIdPolicy::PerMatch)
            .with_turn_flow(TurnFlow::Manual)
            .with_human_draw_at_turn_end(true);

        assert_eq!(config.min_deck_size, 30);
        assert_eq!(config.dealt_before_library(), 12);
        assert_eq!(config.log_ids, LogIdPolicy::PerMatch);
        assert_eq!(config.turn_flow, TurnFlow::Manual);
        assert!(config.human_draws_at_turn_end);
    }

    #[test]
    fn test_validate_rejects_oversized_deal() {
        let config = SimulatorConfig::new().with_min_deck_size(8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DealExceedsMinimum {
                dealt: 10,
                min_deck_size: 8
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let config = SimulatorConfig::new()
            .with_min_deck_size(0)
            .with_deal_layout(0, 0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMinDeckSize)));
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            SimulatorConfig::from_json(r#"{"log_ids":"PerMatch","turn_flow":"Manual"}"#).unwrap();

        assert_eq!(config.min_deck_size, 20);
        assert_eq!(config.log_ids, LogIdPolicy::PerMatch);
        assert_eq!(config.turn_flow, TurnFlow::Manual);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            SimulatorConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SimulatorConfig::from_json(r#"{"min_deck_size":5}"#),
            Err(ConfigError::DealExceedsMinimum { .. })
        ));
    }
}
