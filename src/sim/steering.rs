//! Per-tick steering: player input and enemy AI
//!
//! Steering only ever adjusts `facing`, accumulates thrust into `vel`, and
//! toggles the weapon; position integration happens later in the arena
//! pass. Stun gating lives in the driver, which skips steering for a
//! stunned robot while still integrating its physics.

use glam::Vec2;

use super::state::{RngState, Robot};
use super::tick::TickInput;
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Advance the player's heading and thrust from the held control flags
pub fn steer_player(robot: &mut Robot, input: &TickInput, tuning: &Tuning, dt: f32) {
    if input.turn_left {
        robot.facing = normalize_angle(robot.facing + tuning.turn_speed * dt);
    }
    if input.turn_right {
        robot.facing = normalize_angle(robot.facing - tuning.turn_speed * dt);
    }

    // Thrust accumulates into velocity; it is an impulse, not a velocity set
    let dir = robot.facing_dir();
    if input.forward {
        robot.vel += dir * tuning.drive_accel * dt;
    }
    if input.reverse {
        robot.vel -= dir * tuning.drive_accel * dt;
    }

    // Rising edge only; there is no player deactivation, the weapon spins
    // down on its own
    if input.weapon {
        robot.weapon_active = true;
    }
}

/// Turn toward the player and close in; thrust only once roughly on target
pub fn steer_enemy(
    robot: &mut Robot,
    player_pos: Vec2,
    tuning: &Tuning,
    rng: &mut RngState,
    dt: f32,
) {
    let to_player = player_pos - robot.pos;
    let bearing = to_player.y.atan2(to_player.x);
    let diff = normalize_angle(bearing - robot.facing);

    // A fraction of the player turn rate, clamped to never overshoot the
    // bearing within one tick
    let max_step = tuning.turn_speed * tuning.ai_turn_fraction * dt;
    let step = diff.clamp(-max_step, max_step);
    robot.facing = normalize_angle(robot.facing + step);

    if (diff - step).abs() < tuning.ai_aim_tolerance {
        let dir = robot.facing_dir();
        robot.vel += dir * tuning.drive_accel * tuning.enemy_speed_scale * dt;
    }

    if robot.archetype.profile().ai_spins_weapon && rng.chance(tuning.ai_weapon_chance) {
        robot.weapon_active = true;
    }
}

/// Probabilistic weapon spin-down: every robot, every tick, regardless of
/// control source or stun
pub fn decay_weapon(robot: &mut Robot, tuning: &Tuning, rng: &mut RngState) {
    if robot.weapon_active && rng.chance(tuning.weapon_decay_chance) {
        robot.weapon_active = false;
    }
}
