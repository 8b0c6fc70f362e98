//! Round state and core simulation types
//!
//! The only mutators of [`RoundState`] are its own handlers and the per-dart
//! resolution in [`resolve`](super::resolve); presentation reads it and
//! consumes the drained events.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::target::Target;
use super::victim::Victim;
use crate::tuning::RoundTuning;
use crate::{normalize_angle, polar_to_cartesian, rotate_point};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Clock frozen, nothing advances
    Paused,
    /// Run ended (terminal)
    GameOver,
}

/// A deferred step of the level-up or game-over sequence.
///
/// These are plain tick timers advanced only by [`tick`](super::tick::tick),
/// so pausing the round freezes them along with everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Waiting before in-flight darts are swept from the cleared board
    ClearDelay { timer: f32 },
    /// Waiting between the sweep and the next level starting
    LevelDelay { timer: f32 },
    /// Waiting before game over is finalized
    GameOverDelay { timer: f32 },
}

/// What a resolved dart ended up hitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DartOutcome {
    /// Consumed by a target tier
    HitTarget { target_id: u32, tier: usize },
    /// Attributed to the victim (costs a life)
    HitVictim,
    /// Stuck in the backing disc (no consequence)
    HitBacking,
    /// Missed the board entirely (costs a life)
    Miss,
}

/// One in-flight dart; resolved exactly once when its travel ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dart {
    pub id: u32,
    /// World-space release position (the crosshair at throw time)
    pub pos: Vec2,
    /// Release tilt, radians
    pub tilt: f32,
    /// Visual variant index
    pub variant: usize,
    /// Seconds in flight so far
    pub travel: f32,
    /// Flight duration; the dart resolves when `travel` reaches this
    pub travel_time: f32,
}

/// The spinning wheel the targets and victim ride on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wheel {
    /// Current rotation, radians
    pub angle: f32,
    /// Commanded spin speed, radians/sec
    pub speed: f32,
    /// Actual spin speed, eased toward `speed * direction`
    pub current_speed: f32,
    /// Spin direction, +1 or -1 (flips on level-up)
    pub direction: f32,
}

impl Wheel {
    fn new(speed: f32) -> Self {
        Self {
            angle: 0.0,
            speed,
            current_speed: 0.0,
            direction: 1.0,
        }
    }

    /// Ease toward the commanded speed and advance the rotation
    pub fn tick(&mut self, dt: f32) {
        let target = self.speed * self.direction;
        self.current_speed += (target - self.current_speed) * (4.0 * dt).min(1.0);
        self.angle = normalize_angle(self.angle + self.current_speed * dt);
    }
}

/// Seeded RNG source; `stream` advances once per draw so the state stays
/// serializable without carrying generator internals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Next deterministic generator for a single decision
    pub fn next_rng(&mut self) -> Pcg32 {
        self.stream = self.stream.wrapping_add(1);
        Pcg32::seed_from_u64(self.seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: RngState,
    /// Balance table this round was built from
    pub tuning: RoundTuning,
    /// Current phase
    pub phase: RoundPhase,
    /// Pending deferred step, if any
    pub transition: Option<Transition>,
    /// Player lives
    pub lives: i32,
    /// Score
    pub score: i32,
    /// Current level (1-based)
    pub level: u32,
    /// Targets left to hit before leveling up
    pub targets_remaining: u32,
    /// The spinning wheel
    pub wheel: Wheel,
    /// Seconds since the last accepted throw
    pub cooldown_elapsed: f32,
    /// Crosshair position in world space
    pub aim: Vec2,
    /// In-flight darts (spawn order)
    pub darts: Vec<Dart>,
    /// Targets around the ring (ring order)
    pub targets: Vec<Target>,
    /// The victim figure
    pub victim: Victim,
    /// Best persisted score for this round, loaded at start
    pub high_score: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Outbound effects accumulated this tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl RoundState {
    /// Build a fresh round from a balance table
    pub fn new(seed: u64, tuning: RoundTuning, high_score: i32) -> Self {
        let victim = Victim::new(tuning.victim.hit_areas.clone(), tuning.victim.hurt_time);
        let mut state = Self {
            seed,
            rng: RngState::new(seed),
            phase: RoundPhase::Playing,
            transition: None,
            lives: tuning.lives,
            score: 0,
            level: 1,
            targets_remaining: tuning.targets_to_win,
            wheel: Wheel::new(tuning.wheel_speed),
            cooldown_elapsed: 0.0,
            aim: Vec2::ZERO,
            darts: Vec::new(),
            targets: Vec::new(),
            victim,
            high_score,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        };

        state.populate_ring();

        // Sync the displays once at round start
        state.events.push(GameEvent::LivesChanged { lives: state.lives });
        state.events.push(GameEvent::ScoreChanged { score: state.score });
        state.events.push(GameEvent::LevelChanged { level: state.level });

        state
    }

    /// Arrange the level's targets evenly around the ring
    fn populate_ring(&mut self) {
        let count = self.tuning.targets_to_win.max(1) as usize;
        for i in 0..count {
            let theta = std::f32::consts::TAU * i as f32 / count as f32;
            let anchor = polar_to_cartesian(self.tuning.ring_radius, theta);
            let id = self.next_entity_id();
            self.targets
                .push(Target::new(id, anchor, self.tuning.tiers.clone()));
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Transform a world-space point into wheel-local space
    pub fn wheel_local(&self, point: Vec2) -> Vec2 {
        rotate_point(point, -self.wheel.angle)
    }

    /// Is the game-over delay already running?
    pub fn game_over_pending(&self) -> bool {
        matches!(self.transition, Some(Transition::GameOverDelay { .. }))
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attempt a throw at the current aim position.
    ///
    /// Rejected (silently, per the round's failure model) unless the round is
    /// playing, game over isn't pending, and the cooldown window has elapsed.
    pub fn try_throw(&mut self) -> bool {
        if self.phase != RoundPhase::Playing || self.game_over_pending() {
            return false;
        }
        if self.cooldown_elapsed < self.tuning.dart_cooldown {
            return false;
        }

        let mut rng = self.rng.next_rng();
        let variant = rng.random_range(0..self.tuning.dart_variants.max(1));
        let spread = self.tuning.throw_spread;
        let tilt = if spread > 0.0 {
            rng.random_range(-spread..spread)
        } else {
            0.0
        };

        let id = self.next_entity_id();
        self.darts.push(Dart {
            id,
            pos: self.aim,
            tilt,
            variant,
            travel: 0.0,
            travel_time: self.tuning.dart_travel_time,
        });
        self.cooldown_elapsed = 0.0;
        true
    }

    /// Add to the score (no-op once the round is over)
    pub fn change_score(&mut self, delta: i32) {
        if self.phase == RoundPhase::GameOver {
            return;
        }
        self.score += delta;
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    /// Adjust lives; dropping to zero starts the game-over delay.
    ///
    /// Ignored entirely once game over has begun (delay included), so darts
    /// still in flight can't drive lives below the losing state.
    pub fn change_lives(&mut self, delta: i32) {
        if self.phase == RoundPhase::GameOver || self.game_over_pending() {
            return;
        }
        self.lives += delta;
        self.events.push(GameEvent::LivesChanged { lives: self.lives });
        if self.lives <= 0 {
            self.begin_game_over();
        }
    }

    /// Count a hit target toward the level quota; reaching zero starts the
    /// level-up sequence. Guarded so the sequence can only be entered once.
    pub fn reduce_quota(&mut self) {
        if self.phase != RoundPhase::Playing || self.transition.is_some() {
            return;
        }
        if self.targets_remaining > 0 {
            self.targets_remaining -= 1;
            if self.targets_remaining == 0 {
                self.transition = Some(Transition::ClearDelay {
                    timer: self.tuning.clear_delay,
                });
            }
        }
    }

    /// Enter the game-over delay: spin stops at once, lives freeze, and the
    /// round finalizes once the delay runs out
    fn begin_game_over(&mut self) {
        self.wheel.speed = 0.0;
        self.transition = Some(Transition::GameOverDelay {
            timer: self.tuning.game_over_delay,
        });
    }

    /// Finalize game over: terminal phase, cue, high-score check
    pub(super) fn finish_game_over(&mut self) {
        self.phase = RoundPhase::GameOver;
        self.events.push(GameEvent::GameOverCue);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore { score: self.score });
        }
    }

    /// Drop every in-flight dart off the cleared board without resolving it
    pub(super) fn sweep_darts(&mut self) {
        for dart in self.darts.drain(..) {
            self.events.push(GameEvent::DartDropped { pos: dart.pos });
        }
    }

    /// Advance to the next level: reset the quota, re-open every target,
    /// spin faster the other way
    pub(super) fn level_up(&mut self) {
        self.level += 1;
        self.targets_remaining = self.tuning.targets_to_win;
        for target in &mut self.targets {
            target.open();
        }
        self.wheel.speed += self.tuning.wheel_speed_increase;
        self.wheel.direction = -self.wheel.direction;
        self.events.push(GameEvent::LevelChanged { level: self.level });
        self.events.push(GameEvent::LevelUpCue);
        log::info!("Level up: now on level {}", self.level);
    }
}
