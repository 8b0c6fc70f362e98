//! Targets arranged around the wheel, each awarding a tiered bonus.
//!
//! A target latches closed after one hit and stays closed until the next
//! level re-opens it. Positions are stored in wheel-local space; the wheel's
//! rotation is applied by the caller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_point;

/// One bonus ring of a target.
///
/// Content-authoring contract: a target's tiers must be declared
/// innermost-first. Lookup walks the list in declaration order and the first
/// tier whose radius exceeds the hit distance wins, so an outermost-first
/// table would award its widest tier for every hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTier {
    /// Maximum distance from the target center that still counts
    pub radius: f32,
    /// Points awarded
    pub bonus: i32,
    /// Text shown on the bonus label
    pub label: String,
    /// Sound cue played on the hit, if any
    pub sound: Option<String>,
}

/// A single-use-until-reopened hit zone on the wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Position in wheel-local space (rotates with the wheel)
    pub anchor: Vec2,
    /// Bonus tiers, innermost-first (see [`HitTier`])
    pub tiers: Vec<HitTier>,
    /// Closed targets accept no hits until re-opened
    pub is_open: bool,
}

impl Target {
    pub fn new(id: u32, anchor: Vec2, tiers: Vec<HitTier>) -> Self {
        Self {
            id,
            anchor,
            tiers,
            is_open: true,
        }
    }

    /// Re-open the target so it can be hit again (level start / level-up)
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// World-space position of the target for the given wheel angle
    pub fn world_pos(&self, wheel_angle: f32) -> Vec2 {
        rotate_point(self.anchor, wheel_angle)
    }

    /// Test a wheel-local point against this target.
    ///
    /// Returns the index of the matching tier and latches the target closed,
    /// or `None` if the target is closed or no tier radius covers the point.
    /// Tiers are scanned in declaration order, not by best fit.
    pub fn check_hit(&mut self, point: Vec2) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        for (index, tier) in self.tiers.iter().enumerate() {
            if point.distance(self.anchor) < tier.radius {
                self.is_open = false;
                return Some(index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tiers() -> Vec<HitTier> {
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
                sound: None,
            },
        ]
    }

    #[test]
    fn test_tier_by_distance() {
        let mut target = Target::new(1, Vec2::new(100.0, 0.0), tiers());
        assert_eq!(target.check_hit(Vec2::new(105.0, 0.0)), Some(0));

        target.open();
        assert_eq!(target.check_hit(Vec2::new(120.0, 0.0)), Some(1));

        target.open();
        assert_eq!(target.check_hit(Vec2::new(140.0, 0.0)), Some(2));

        target.open();
        assert_eq!(target.check_hit(Vec2::new(150.0, 0.0)), None);
        assert!(target.is_open);
    }

    #[test]
    fn test_declaration_order_wins_over_tighter_fit() {
        // Outermost-first authoring: the wide tier shadows the tight one.
        let shadowed = vec![
            HitTier {
                radius: 44.0,
                bonus: 50,
                label: "GOOD".into(),
                sound: None,
            },
            HitTier {
                radius: 14.0,
                bonus: 300,
                label: "BULLSEYE!".into(),
                sound: None,
            },
        ];
        let mut target = Target::new(1, Vec2::ZERO, shadowed);
        // Dead center would fit tier 1, but tier 0 is scanned first.
        assert_eq!(target.check_hit(Vec2::ZERO), Some(0));
    }

    #[test]
    fn test_latches_closed_until_reopened() {
        let mut target = Target::new(1, Vec2::ZERO, tiers());
        assert_eq!(target.check_hit(Vec2::ZERO), Some(0));
        assert!(!target.is_open);
        assert_eq!(target.check_hit(Vec2::ZERO), None);

        target.open();
        assert_eq!(target.check_hit(Vec2::ZERO), Some(0));
    }

    #[test]
    fn test_world_pos_follows_wheel() {
        let target = Target::new(1, Vec2::new(100.0, 0.0), tiers());
        let p = target.world_pos(std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 0.001);
        assert!((p.y - 100.0).abs() < 0.001);
    }

    proptest! {
        /// The matching tier is always the first index whose radius exceeds
        /// the hit distance, regardless of how the radii are ordered.
        #[test]
        fn prop_first_matching_index_wins(
            radii in proptest::collection::vec(1.0f32..200.0, 1..6),
            dist in 0.0f32..250.0,
        ) {
            let tiers: Vec<HitTier> = radii
                .iter()
                .map(|&radius| HitTier {
                    radius,
                    bonus: 10,
                    label: "X".into(),
                    sound: None,
                })
                .collect();
            let mut target = Target::new(1, Vec2::ZERO, tiers);
            let got = target.check_hit(Vec2::new(dist, 0.0));
            let expected = radii.iter().position(|&r| dist < r);
            prop_assert_eq!(got, expected);
            prop_assert_eq!(target.is_open, expected.is_none());
        }
    }
}
