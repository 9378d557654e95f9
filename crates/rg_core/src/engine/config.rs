//! Engine configuration
//!
//! All tuning knobs in one serde-friendly struct, with presets. The
//! two intervals are independent: detection and scoring each keep
//! their own timer and need not line up.

use serde::{Deserialize, Serialize};

/// How the victim pool for one capturing group is selected.
///
/// Both variants exist in the wild; the choice is explicit per group
/// rather than baked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "tag", rename_all = "snake_case")]
pub enum VictimSelect {
    /// Only pieces carrying this opposing tag can be captured
    Tagged(String),
    /// Every piece outside the capturing classification is fair game,
    /// team membership notwithstanding
    NotInGroup,
}

/// One loop-building classification: which pieces form the graph and
/// who they can capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Tag selecting the graph members (a team tag or a narrower
    /// capturing-subgroup tag)
    pub member_tag: String,
    pub victims: VictimSelect,
}

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Seconds between capture-detection passes
    pub detection_interval: f32,
    /// Seconds between territory-scoring passes
    pub scoring_interval: f32,
    /// Default zone radius; the live value comes from the per-step
    /// context and may differ
    pub zone_radius: f32,
    /// Fixed additive offset credited to team B on every recount
    pub komi: f32,
    /// Tag counted into the team A score
    pub team_a_tag: String,
    /// Tag counted into the team B score
    pub team_b_tag: String,
    /// Capturing classifications evaluated each detection pass, in
    /// order
    pub groups: Vec<GroupConfig>,
    /// Keep adjacency segments and cycle polygons for a rendering
    /// layer
    #[serde(default)]
    pub debug_overlay: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::two_teams("team_a", "team_b")
    }
}

impl CaptureConfig {
    /// Standard two-team setup: each team's loops capture the other
    /// team's stones, white gets the komi.
    pub fn two_teams(team_a: &str, team_b: &str) -> Self {
        Self {
            detection_interval: 0.2,
            scoring_interval: 0.2,
            zone_radius: 300.0,
            komi: 0.5,
            team_a_tag: team_a.to_string(),
            team_b_tag: team_b.to_string(),
            groups: vec![
                GroupConfig {
                    member_tag: team_a.to_string(),
                    victims: VictimSelect::Tagged(team_b.to_string()),
                },
                GroupConfig {
                    member_tag: team_b.to_string(),
                    victims: VictimSelect::Tagged(team_a.to_string()),
                },
            ],
            debug_overlay: false,
        }
    }

    /// Test preset: both timers fire on every step of `dt >= 0.01`.
    pub fn fast_test() -> Self {
        let mut cfg = Self::default();
        cfg.detection_interval = 0.01;
        cfg.scoring_interval = 0.01;
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_team_capture() {
        let cfg = CaptureConfig::default();
        assert_eq!(cfg.groups.len(), 2);
        assert_eq!(cfg.groups[0].member_tag, "team_a");
        assert_eq!(cfg.groups[0].victims, VictimSelect::Tagged("team_b".to_string()));
        assert_eq!(cfg.komi, 0.5);
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = CaptureConfig {
            groups: vec![GroupConfig {
                member_tag: "hunters".to_string(),
                victims: VictimSelect::NotInGroup,
            }],
            ..CaptureConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CaptureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_victim_select_json_shape() {
        let json = serde_json::to_value(VictimSelect::Tagged("team_b".into())).unwrap();
        assert_eq!(json["mode"], "tagged");
        assert_eq!(json["tag"], "team_b");
        let json = serde_json::to_value(VictimSelect::NotInGroup).unwrap();
        assert_eq!(json["mode"], "not_in_group");
    }
}
