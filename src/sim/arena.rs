//! Velocity integration and arena boundary resolution
//!
//! The arena floor is a square of half-size `arena_half_size`. Each wall
//! runs the length of its side except for a gap of `gap_width` at both
//! ends: the corner pits. A wall only constrains a robot while its
//! cross-axis coordinate is inside the solid span; a robot that slips
//! through a gap and leaves the footprint falls out of play.

use super::state::{GameEvent, Robot};
use crate::consts::PIT_OVERHANG;
use crate::tuning::Tuning;

/// Advance one robot by its velocity, damp it, and resolve walls and pits
pub fn integrate(robot: &mut Robot, tuning: &Tuning, dt: f32, events: &mut Vec<GameEvent>) {
    robot.pos += robot.vel * dt;
    // Pure exponential decay, per tick at the fixed timestep
    robot.vel *= tuning.friction;

    let limit = tuning.wall_limit();
    let solid = tuning.solid_wall_extent();

    // X walls constrain only while the robot is clear of the corner gaps on Y
    if robot.pos.y.abs() < solid && robot.pos.x.abs() > limit {
        robot.pos.x = limit.copysign(robot.pos.x);
        robot.vel.x *= -tuning.wall_bounce;
        events.push(GameEvent::WallBounce { id: robot.id });
    }
    // And Y walls while clear of the gaps on X
    if robot.pos.x.abs() < solid && robot.pos.y.abs() > limit {
        robot.pos.y = limit.copysign(robot.pos.y);
        robot.vel.y *= -tuning.wall_bounce;
        events.push(GameEvent::WallBounce { id: robot.id });
    }

    // Past the footprint entirely: fell through a corner pit. Unconditional
    // for any robot that got this far.
    let edge = tuning.arena_half_size + PIT_OVERHANG;
    if robot.pos.x.abs() > edge || robot.pos.y.abs() > edge {
        robot.kill();
        events.push(GameEvent::PitFall { id: robot.id });
        events.push(GameEvent::Destroyed { id: robot.id });
        log::debug!("robot {} fell into a pit at {:?}", robot.id, robot.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::Archetype;
    use glam::Vec2;

    fn robot_at(pos: Vec2, vel: Vec2) -> Robot {
        let mut r = Robot::new(0, false, Archetype::Tank, pos, 0.0, 100.0);
        r.vel = vel;
        r
    }

    #[test]
    fn test_stationary_robot_does_not_move() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        let mut r = robot_at(Vec2::new(3.0, -2.0), Vec2::ZERO);

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert_eq!(r.pos, Vec2::new(3.0, -2.0));
        assert_eq!(r.vel, Vec2::ZERO);
        assert!(events.is_empty());
    }

    #[test]
    fn test_friction_damps_velocity() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        let mut r = robot_at(Vec2::ZERO, Vec2::new(6.0, 0.0));

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert!((r.pos.x - 6.0 * SIM_DT).abs() < 1e-5);
        assert!((r.vel.x - 6.0 * tuning.friction).abs() < 1e-5);
    }

    #[test]
    fn test_wall_clamps_and_bounces() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        // On the solid span of the +X wall (y = 0), moving out fast
        let mut r = robot_at(Vec2::new(tuning.wall_limit() - 0.01, 0.0), Vec2::new(50.0, 0.0));

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert_eq!(r.pos.x, tuning.wall_limit());
        // Inverted and damped, not elastic
        assert!(r.vel.x < 0.0);
        assert!((r.vel.x + 50.0 * tuning.friction * tuning.wall_bounce).abs() < 1e-4);
        assert!(!r.is_dead);
        assert!(matches!(events[0], GameEvent::WallBounce { id: 0 }));
    }

    #[test]
    fn test_wall_clamp_negative_side() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        let mut r = robot_at(Vec2::new(0.0, -tuning.wall_limit()), Vec2::new(0.0, -40.0));

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert_eq!(r.pos.y, -tuning.wall_limit());
        assert!(r.vel.y > 0.0);
    }

    #[test]
    fn test_corner_gap_lets_robot_through() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        // In the gap span on Y (past the solid extent), so no +X wall
        let y = tuning.solid_wall_extent() + 1.0;
        let mut r = robot_at(Vec2::new(tuning.wall_limit() - 0.01, y), Vec2::new(20.0, 0.0));

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert!(r.pos.x > tuning.wall_limit());
        assert!(r.vel.x > 0.0); // no bounce
        assert!(!r.is_dead); // not past the footprint yet
    }

    #[test]
    fn test_pit_fall_kills_regardless_of_health() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        let y = tuning.solid_wall_extent() + 1.0;
        let edge = tuning.arena_half_size + PIT_OVERHANG;
        let mut r = robot_at(Vec2::new(edge + 0.1, y), Vec2::ZERO);
        r.health = 87.0;

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert!(r.is_dead);
        assert_eq!(r.health, 0.0);
        assert!(events.contains(&GameEvent::PitFall { id: 0 }));
        assert!(events.contains(&GameEvent::Destroyed { id: 0 }));
    }

    #[test]
    fn test_pit_fall_on_y_axis() {
        let tuning = Tuning::default();
        let mut events = Vec::new();
        let x = tuning.solid_wall_extent() + 1.0;
        let edge = tuning.arena_half_size + PIT_OVERHANG;
        let mut r = robot_at(Vec2::new(x, -(edge + 0.2)), Vec2::ZERO);

        integrate(&mut r, &tuning, SIM_DT, &mut events);
        assert!(r.is_dead);
        assert_eq!(r.health, 0.0);
    }

    #[test]
    fn test_contained_robot_never_exceeds_wall() {
        let tuning = Tuning::default();
        // Any single-tick outward velocity gets clamped while on a solid span
        for speed in [1.0, 10.0, 100.0, 10_000.0] {
            let mut events = Vec::new();
            let mut r = robot_at(Vec2::new(0.0, 5.0), Vec2::new(speed, 0.0));
            integrate(&mut r, &tuning, SIM_DT, &mut events);
            assert!(r.pos.x <= tuning.wall_limit());
            assert!(!r.is_dead);
        }
    }
}
