//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (ring order for targets, spawn order for darts)
//! - No rendering or platform dependencies

pub mod events;
pub mod resolve;
pub mod shape;
pub mod state;
pub mod target;
pub mod tick;
pub mod victim;

pub use events::GameEvent;
pub use resolve::resolve_dart;
pub use shape::HitShape;
pub use state::{Dart, DartOutcome, RngState, RoundPhase, RoundState, Transition, Wheel};
pub use target::{HitTier, Target};
pub use tick::{TickInput, tick};
pub use victim::{HitArea, Reaction, Victim};
