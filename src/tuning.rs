//! Data-driven round balance.
//!
//! Everything a content author can reasonably retune lives here: lives,
//! quotas, cooldowns, wheel speeds, the tier tables and the victim's hit
//! areas. Defaults mirror the shipped round; a whole table can be swapped in
//! from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::shape::HitShape;
use crate::sim::target::HitTier;
use crate::sim::victim::{HitArea, Reaction};

/// Authoring data for the victim figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VictimSpec {
    pub hit_areas: Vec<HitArea>,
    pub hurt_time: f32,
}

/// Complete balance table for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTuning {
    /// Lives at round start
    pub lives: i32,
    /// Targets to hit before leveling up (also the ring population)
    pub targets_to_win: u32,
    /// Seconds between accepted throws
    pub dart_cooldown: f32,
    /// Seconds a dart spends in flight before resolving
    pub dart_travel_time: f32,
    /// Visual dart variants to pick from on throw
    pub dart_variants: usize,
    /// Maximum release tilt either way, radians
    pub throw_spread: f32,
    /// Wheel spin at level 1, radians/sec
    pub wheel_speed: f32,
    /// Spin added on every level-up
    pub wheel_speed_increase: f32,
    /// Radius of the backing disc
    pub backing_radius: f32,
    /// Radius of the target ring
    pub ring_radius: f32,
    /// Bonus tiers shared by every target, innermost-first
    pub tiers: Vec<HitTier>,
    /// Victim figure authoring
    pub victim: VictimSpec,
    /// Seconds before swept darts drop off a cleared board
    pub clear_delay: f32,
    /// Seconds between the board sweep and the next level
    pub level_delay: f32,
    /// Seconds before game over is finalized
    pub game_over_delay: f32,
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            lives: START_LIVES,
            targets_to_win: TARGETS_TO_WIN,
            dart_cooldown: DART_COOLDOWN,
            dart_travel_time: DART_TRAVEL_TIME,
            dart_variants: DART_VARIANTS,
            throw_spread: THROW_SPREAD,
            wheel_speed: WHEEL_START_SPEED,
            wheel_speed_increase: WHEEL_SPEED_INCREASE,
            backing_radius: BACKING_RADIUS,
            ring_radius: RING_RADIUS,
            tiers: default_tiers(),
            victim: default_victim(),
            clear_delay: CLEAR_DELAY,
            level_delay: LEVEL_DELAY,
            game_over_delay: GAME_OVER_DELAY,
        }
    }
}

impl RoundTuning {
    /// Parse a tuning table from JSON; absent fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_tiers() -> Vec<HitTier> {
    vec![
        HitTier {
            radius: 14.0,
            bonus: 300,
            label: "BULLSEYE!".into(),
            sound: Some("bonus_high".into()),
        },
        HitTier {
            radius: 30.0,
            bonus: 150,
            label: "GREAT!".into(),
            sound: Some("bonus_mid".into()),
        },
        HitTier {
            radius: 44.0,
            bonus: 50,
            label: "GOOD".into(),
            sound: Some("bonus_low".into()),
        },
    ]
}

fn default_victim() -> VictimSpec {
    VictimSpec {
        hit_areas: vec![
            // Head
            HitArea {
                shape: HitShape::Circle {
                    center: Vec2::new(0.0, 118.0),
                    radius: 28.0,
                },
                reactions: vec![
                    Reaction {
                        face: 1,
                        sound: Some("ouch_yelp".into()),
                    },
                    Reaction {
                        face: 2,
                        sound: Some("ouch_grunt".into()),
                    },
                    Reaction {
                        face: 3,
                        sound: Some("ouch_gasp".into()),
                    },
                ],
            },
            // Torso
            HitArea {
                shape: HitShape::Rect {
                    center: Vec2::new(0.0, 46.0),
                    half_extents: Vec2::new(34.0, 52.0),
                },
                reactions: vec![
                    Reaction {
                        face: 2,
                        sound: Some("ouch_grunt".into()),
                    },
                    Reaction {
                        face: 4,
                        sound: Some("ouch_wheeze".into()),
                    },
                ],
            },
            // Legs
            HitArea {
                shape: HitShape::Rect {
                    center: Vec2::new(0.0, -52.0),
                    half_extents: Vec2::new(26.0, 58.0),
                },
                reactions: vec![Reaction {
                    face: 1,
                    sound: Some("ouch_yelp".into()),
                }],
            },
        ],
        hurt_time: HURT_TIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_author_tiers_innermost_first() {
        let tuning = RoundTuning::default();
        for pair in tuning.tiers.windows(2) {
            assert!(pair[0].radius < pair[1].radius);
        }
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = RoundTuning::from_json(r#"{ "lives": 5, "dart_cooldown": 0.25 }"#).unwrap();
        assert_eq!(tuning.lives, 5);
        assert_eq!(tuning.dart_cooldown, 0.25);
        // Untouched fields keep their defaults
        assert_eq!(tuning.targets_to_win, TARGETS_TO_WIN);
        assert_eq!(tuning.tiers.len(), 3);
    }

    #[test]
    fn test_tuning_round_trips() {
        let tuning = RoundTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(RoundTuning::from_json(&json).unwrap(), tuning);
    }
}
