//! The victim strapped to the wheel.
//!
//! Hitting any of its hit areas costs the player a life (reported by the
//! resolution judge, not here) and swaps its face to a random hurt reaction
//! for a short while.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::shape::HitShape;

/// Face index for the unhurt expression
pub const NEUTRAL_FACE: u8 = 0;

/// A hurt face and the sound that goes with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub face: u8,
    pub sound: Option<String>,
}

/// One hittable region of the victim with its own reaction pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitArea {
    /// Shape in wheel-local space
    pub shape: HitShape,
    pub reactions: Vec<Reaction>,
}

/// The composite figure guarded by the target ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Victim {
    /// Hit areas, tested in declaration order
    pub hit_areas: Vec<HitArea>,
    /// Seconds a hurt face is held before reverting
    pub hurt_time: f32,
    /// Counts down to the neutral face
    reaction_timer: f32,
    /// Currently shown face
    pub current_face: u8,
}

impl Victim {
    pub fn new(hit_areas: Vec<HitArea>, hurt_time: f32) -> Self {
        Self {
            hit_areas,
            hurt_time,
            reaction_timer: 0.0,
            current_face: NEUTRAL_FACE,
        }
    }

    /// Test a wheel-local point against the hit areas, in order.
    ///
    /// On the first containing area: picks one reaction uniformly at random
    /// (if the area has any), applies its face, emits the reaction event and
    /// returns true. Returns false when no area contains the point.
    pub fn try_hit(&mut self, point: Vec2, rng: &mut Pcg32, events: &mut Vec<GameEvent>) -> bool {
        for area in &self.hit_areas {
            if !area.shape.contains(point) {
                continue;
            }
            self.reaction_timer = self.hurt_time;
            let mut face = self.current_face;
            let mut sound = None;
            if !area.reactions.is_empty() {
                let pick = &area.reactions[rng.random_range(0..area.reactions.len())];
                face = pick.face;
                sound = pick.sound.clone();
            }
            self.current_face = face;
            events.push(GameEvent::VictimReaction {
                pos: point,
                face,
                sound,
            });
            return true;
        }
        false
    }

    /// Per-frame countdown; restores the neutral face when the timer runs out
    pub fn tick(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if self.reaction_timer > 0.0 {
            self.reaction_timer -= dt;
        } else if self.current_face != NEUTRAL_FACE {
            self.current_face = NEUTRAL_FACE;
            events.push(GameEvent::VictimRecovered);
        }
    }
}
