//! Outbound effect events consumed by presentation collaborators.
//!
//! The simulation accumulates these on [`RoundState`](super::RoundState) and
//! the shell drains them once per tick. They are fire-and-forget: nothing in
//! the simulation depends on whether anyone listens.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One presentation-facing effect or display update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A target tier was hit; spawn the floating bonus label
    BonusAwarded {
        pos: Vec2,
        label: String,
        bonus: i32,
        sound: Option<String>,
    },
    /// A dart missed everything; spawn the miss effect
    MissEffect { pos: Vec2 },
    /// The victim was hit; swap to a hurt face and play its sound
    VictimReaction {
        pos: Vec2,
        face: u8,
        sound: Option<String>,
    },
    /// The hurt timer ran out; restore the neutral face
    VictimRecovered,
    /// A dart pinned itself to a target or the backing
    DartStuck { pos: Vec2, tilt: f32, variant: usize },
    /// A dart fell off the board (victim hit, clean miss, or board sweep)
    DartDropped { pos: Vec2 },
    /// Level-up fanfare
    LevelUpCue,
    /// Game-over sting
    GameOverCue,
    /// Lives display update
    LivesChanged { lives: i32 },
    /// Score display update
    ScoreChanged { score: i32 },
    /// Level display update
    LevelChanged { level: u32 },
    /// Final score beat the stored best for this round
    NewHighScore { score: i32 },
}
