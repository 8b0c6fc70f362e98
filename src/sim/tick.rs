//! Fixed timestep simulation tick
//!
//! Advances the round deterministically: cooldowns, dart flight, outcome
//! resolution, the victim's hurt timer, and the deferred level-up and
//! game-over sequences. Pausing freezes all of it; every delay in the round
//! is a tick timer, so nothing keys off an unpausable wall clock.

use glam::Vec2;

use super::resolve::resolve_dart;
use super::state::{RoundPhase, RoundState, Transition};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Crosshair position in world space, when it moved
    pub aim: Option<Vec2>,
    /// Throw command (no payload; rate-limited by the cooldown)
    pub throw: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut RoundState, input: &TickInput, dt: f32) {
    // Pause toggle; locked out once the game-over delay has begun
    if input.pause && !state.game_over_pending() {
        match state.phase {
            RoundPhase::Playing => {
                state.phase = RoundPhase::Paused;
                return;
            }
            RoundPhase::Paused => state.phase = RoundPhase::Playing,
            RoundPhase::GameOver => {}
        }
    }

    // Nothing advances while paused, the transition timers included
    if state.phase == RoundPhase::Paused {
        return;
    }

    // The wheel keeps easing after game over (its commanded speed is zero by
    // then), so it visibly coasts to a stop
    state.wheel.tick(dt);

    if state.phase == RoundPhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if let Some(aim) = input.aim {
        state.aim = aim;
    }

    // Count up to the next allowed throw
    if state.cooldown_elapsed < state.tuning.dart_cooldown {
        state.cooldown_elapsed += dt;
    }

    if input.throw {
        state.try_throw();
    }

    // Advance dart flight; judge every dart whose travel ended, in spawn
    // order, each exactly once
    for dart in &mut state.darts {
        dart.travel += dt;
    }
    while let Some(index) = state.darts.iter().position(|d| d.travel >= d.travel_time) {
        let dart = state.darts.remove(index);
        resolve_dart(state, &dart);
    }

    // Hurt face countdown
    state.victim.tick(dt, &mut state.events);

    // Deferred sequence steps
    if let Some(transition) = state.transition {
        state.transition = match transition {
            Transition::ClearDelay { timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    state.sweep_darts();
                    Some(Transition::LevelDelay {
                        timer: state.tuning.level_delay,
                    })
                } else {
                    Some(Transition::ClearDelay { timer })
                }
            }
            Transition::LevelDelay { timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    state.level_up();
                    None
                } else {
                    Some(Transition::LevelDelay { timer })
                }
            }
            Transition::GameOverDelay { timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    state.finish_game_over();
                    None
                } else {
                    Some(Transition::GameOverDelay { timer })
                }
            }
        };
    }
}
