//! Per-dart outcome resolution.
//!
//! Runs exactly once per dart, when its flight ends. Precedence: open
//! targets (ring order, at most one consumes the dart), then the victim's
//! hit areas, then the backing disc, otherwise a clean miss.

use super::events::GameEvent;
use super::state::{Dart, DartOutcome, RoundState};

/// Judge a dart whose travel has finished and apply the consequences.
///
/// The caller removes the dart from the round before calling; a dart is never
/// resolved twice.
pub fn resolve_dart(state: &mut RoundState, dart: &Dart) -> DartOutcome {
    let local = state.wheel_local(dart.pos);

    // Targets first. The first open target whose tier covers the point
    // consumes the dart; overlapping zones never award twice.
    let mut hit: Option<(usize, usize)> = None;
    for (index, target) in state.targets.iter_mut().enumerate() {
        if let Some(tier) = target.check_hit(local) {
            hit = Some((index, tier));
            break;
        }
    }
    if let Some((index, tier_index)) = hit {
        let target_id = state.targets[index].id;
        let label_pos = state.targets[index].world_pos(state.wheel.angle);
        let tier = state.targets[index].tiers[tier_index].clone();
        state.events.push(GameEvent::BonusAwarded {
            pos: label_pos,
            label: tier.label,
            bonus: tier.bonus,
            sound: tier.sound,
        });
        state.events.push(GameEvent::DartStuck {
            pos: dart.pos,
            tilt: dart.tilt,
            variant: dart.variant,
        });
        state.change_score(tier.bonus);
        state.reduce_quota();
        return DartOutcome::HitTarget {
            target_id,
            tier: tier_index,
        };
    }

    // No target took it: the victim is next in line. A victim hit costs
    // exactly one life, and only this judge reports it.
    let mut rng = state.rng.next_rng();
    if state.victim.try_hit(local, &mut rng, &mut state.events) {
        state.events.push(GameEvent::DartDropped { pos: dart.pos });
        state.change_lives(-1);
        return DartOutcome::HitVictim;
    }

    // The backing absorbs the dart with no score or life change
    if local.length() < state.tuning.backing_radius {
        state.events.push(GameEvent::DartStuck {
            pos: dart.pos,
            tilt: dart.tilt,
            variant: dart.variant,
        });
        return DartOutcome::HitBacking;
    }

    // Missed the board entirely
    state.events.push(GameEvent::MissEffect { pos: dart.pos });
    state.events.push(GameEvent::DartDropped { pos: dart.pos });
    state.change_lives(-1);
    DartOutcome::Miss
}
