//! Dart Wheel - a carnival wheel dart-throwing arcade round
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hit resolution, round progression)
//! - `tuning`: Data-driven round balance
//! - `highscores`: Persisted per-round best scores

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::RoundTuning;

use glam::Vec2;

/// Round configuration constants (defaults for [`tuning::RoundTuning`])
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Lives at round start
    pub const START_LIVES: i32 = 3;
    /// Targets to hit before leveling up
    pub const TARGETS_TO_WIN: u32 = 8;

    /// Seconds between accepted throws
    pub const DART_COOLDOWN: f32 = 1.0;
    /// Seconds a thrown dart spends in flight before it resolves
    pub const DART_TRAVEL_TIME: f32 = 0.35;
    /// Number of visual dart variants to pick from on throw
    pub const DART_VARIANTS: usize = 3;
    /// Maximum release tilt either way, radians (~40 degrees)
    pub const THROW_SPREAD: f32 = 0.698;

    /// Wheel spin at level 1, radians/sec
    pub const WHEEL_START_SPEED: f32 = 0.35;
    /// Spin added on every level-up
    pub const WHEEL_SPEED_INCREASE: f32 = 0.15;

    /// Radius of the backing disc darts can stick to
    pub const BACKING_RADIUS: f32 = 260.0;
    /// Radius of the ring the targets are arranged on
    pub const RING_RADIUS: f32 = 185.0;

    /// Seconds the victim holds a hurt face
    pub const HURT_TIME: f32 = 1.0;

    /// Delay before swept darts drop off a cleared board
    pub const CLEAR_DELAY: f32 = 0.5;
    /// Delay between the board sweep and the next level starting
    pub const LEVEL_DELAY: f32 = 0.5;
    /// Delay before game over is finalized
    pub const GAME_OVER_DELAY: f32 = 1.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rotate a point by the given angle around the origin
#[inline]
pub fn rotate_point(point: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(point)
}
