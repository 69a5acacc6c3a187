use serde::{Deserialize, Serialize};

/// What happens when the bidding comes back around to the dealer a second
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DealerRule {
    /// The dealer may not pass and must name trump.
    #[default]
    StickTheDealer,
    /// Everyone may pass; the hand is thrown in and the next dealer deals.
    Redeal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub points_to_win: u32,
    pub follow_suit: bool,
    pub dealer_rule: DealerRule,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            points_to_win: 10,
            follow_suit: true,
            dealer_rule: DealerRule::default(),
        }
    }
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: MatchConfig = serde_json::from_str(r#"{"dealer_rule": "Redeal"}"#).unwrap();
    assert_eq!(config.dealer_rule, DealerRule::Redeal);
    assert_eq!(config.points_to_win, 10);
    assert!(config.follow_suit);
}
