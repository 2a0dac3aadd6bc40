//! Fixed timestep simulation driver
//!
//! Orchestrates one tick: steering → integration/boundary → collision →
//! match-state evaluation → camera follow. Outside `MatchPhase::Running`
//! the simulation is completely frozen; the only mid-match "cancellation"
//! is a robot being marked dead, which drops it from future passes while
//! it stays in the collection until reset.

use super::arena;
use super::combat;
use super::state::{GameEvent, MatchPhase, SimState};
use super::steering;

/// Held logical controls sampled at tick start (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub reverse: bool,
    /// Weapon trigger; latches the weapon on, never off
    pub weapon: bool,
    /// Start a fresh match from NotStarted or a terminal phase
    pub restart: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if input.restart && state.phase != MatchPhase::Running {
        state.reset();
        return;
    }
    // Total freeze outside active combat
    if state.phase != MatchPhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.events.clear();
    let now = state.time_secs();

    // AI aims at where the player stood when the tick began; nothing in
    // this pass reads another robot's in-progress mutation
    let player_pos = state.player().filter(|p| !p.is_dead).map(|p| p.pos);

    // Steering, plus the passive weapon duty cycle, for every live robot
    for robot in state.robots.iter_mut() {
        if robot.is_dead {
            continue;
        }
        steering::decay_weapon(robot, &state.tuning, &mut state.rng);
        if robot.is_stunned(now) {
            // Input suppressed; physics still integrates below
            continue;
        }
        if robot.is_player {
            steering::steer_player(robot, input, &state.tuning, dt);
        } else if let Some(target) = player_pos {
            steering::steer_enemy(robot, target, &state.tuning, &mut state.rng, dt);
        }
    }

    // Integration and boundary resolution
    for robot in state.robots.iter_mut() {
        if robot.is_dead {
            continue;
        }
        arena::integrate(robot, &state.tuning, dt, &mut state.events);
    }

    // Pairwise collision and combat over alive robots
    combat::resolve_collisions(&mut state.robots, now, &state.tuning, &mut state.events);

    update_match_phase(state);
    update_camera(state);
}

/// Re-evaluate win/loss from entity state
///
/// A missing player degrades to Lost rather than panicking, and Lost takes
/// precedence on a simultaneous wipeout, so Won and Lost stay exclusive.
fn update_match_phase(state: &mut SimState) {
    let player_alive = state.player().is_some_and(|p| !p.is_dead);
    let next = if !player_alive {
        MatchPhase::Lost
    } else if state.enemies_alive() == 0 {
        MatchPhase::Won
    } else {
        MatchPhase::Running
    };
    if next != state.phase {
        state.phase = next;
        state.events.push(GameEvent::MatchOver { phase: next });
        log::info!("match over: {:?} after {} ticks", next, state.time_ticks);
    }
}

/// Chase camera: the target trails behind the player opposite its facing,
/// and the rig eases toward it a little each tick
fn update_camera(state: &mut SimState) {
    let Some(player) = state.player() else {
        return;
    };
    let target = player.pos - player.facing_dir() * state.tuning.camera_follow_dist;
    state.camera.target = target;
    state.camera.pos = state.camera.pos.lerp(target, state.tuning.camera_smoothing);
}
