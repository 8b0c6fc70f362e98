//! Dart Wheel entry point
//!
//! Natively this runs a headless demo round: a scripted player that leads
//! the spinning wheel, with every outbound effect logged. On wasm32 the crate
//! is driven by the embedding page; the entry point only wires up logging.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use dart_wheel::consts::SIM_DT;
    use dart_wheel::sim::{GameEvent, RoundPhase, RoundState, TickInput, tick};
    use dart_wheel::{HighScores, RoundTuning, rotate_point};

    const ROUND_KEY: &str = "wheel";

    /// Where to aim so the dart meets the target after its flight
    fn lead_open_target(state: &RoundState) -> Option<Vec2> {
        let target = state.targets.iter().find(|t| t.is_open)?;
        let flight_ticks = (state.tuning.dart_travel_time / SIM_DT).ceil();
        let lead = state.wheel.current_speed * flight_ticks * SIM_DT;
        Some(rotate_point(target.anchor, state.wheel.angle + lead))
    }

    pub fn run(seed: u64, tuning: RoundTuning) {
        let mut scores = HighScores::load();
        let best = scores.get(ROUND_KEY);
        log::info!("Starting round (seed {seed}, best so far {best})");

        let mut state = RoundState::new(seed, tuning, best);

        while state.phase != RoundPhase::GameOver {
            let mut input = TickInput::default();
            if let Some(aim) = lead_open_target(&state) {
                input.aim = Some(aim);
                input.throw = state.cooldown_elapsed >= state.tuning.dart_cooldown;
            }
            tick(&mut state, &input, SIM_DT);

            for event in state.drain_events() {
                match event {
                    GameEvent::BonusAwarded { label, bonus, .. } => {
                        log::info!("{label} +{bonus}");
                    }
                    GameEvent::MissEffect { pos } => log::info!("MISS at {pos}"),
                    GameEvent::VictimReaction { face, .. } => {
                        log::info!("Ouch! (face {face})");
                    }
                    GameEvent::LevelChanged { level } => log::info!("LEVEL {level}"),
                    GameEvent::GameOverCue => log::info!("GAME OVER"),
                    GameEvent::NewHighScore { score } => {
                        log::info!("NEW HIGH SCORE: {score}");
                        scores.record(ROUND_KEY, score);
                        scores.save();
                    }
                    _ => log::debug!("{event:?}"),
                }
            }

            // The scripted player clears a few levels, then stops playing so
            // the round can finish
            if state.level > 3 {
                break;
            }
        }

        log::info!(
            "Round ended: score {}, level {}, lives {}",
            state.score,
            state.level,
            state.lives
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xDA27_0001);
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|err| {
                log::error!("Could not read tuning file {path}: {err}");
                std::process::exit(1);
            });
            dart_wheel::RoundTuning::from_json(&json).unwrap_or_else(|err| {
                log::error!("Bad tuning file {path}: {err}");
                std::process::exit(1);
            })
        }
        None => dart_wheel::RoundTuning::default(),
    };

    demo::run(seed, tuning);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Dart Wheel simulation loaded");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
