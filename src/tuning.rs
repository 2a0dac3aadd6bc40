//! Data-driven game balance
//!
//! Every gameplay constant the simulation consumes lives here so a frontend
//! can rebalance the game without recompiling the core. `Default` carries
//! the shipped values; `from_json` accepts partial overrides.

use serde::{Deserialize, Serialize};

/// The complete balance surface for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    /// Half-size of the square arena floor
    pub arena_half_size: f32,
    /// Depth of the corner pit gap at each end of a wall
    pub gap_width: f32,
    /// Fraction of velocity retained (and inverted) by a wall hit
    pub wall_bounce: f32,

    // === Robots ===
    /// Body radius used for walls and robot-robot contact
    pub robot_radius: f32,
    /// Health every robot is created with
    pub max_health: f32,
    /// Thrust acceleration (units/s²) added along facing while driving
    pub drive_accel: f32,
    /// Player turn rate (radians/s)
    pub turn_speed: f32,
    /// Per-tick multiplicative velocity damping
    pub friction: f32,

    // === Combat ===
    /// Robots collide when closer than this multiple of robot_radius
    pub contact_scale: f32,
    /// Fraction of the penetration depth each robot is pushed out
    pub separation_push: f32,
    /// Velocity impulse both robots receive along the contact normal
    pub knockback_base: f32,
    /// Extra pair knockback while a spinner weapon is running
    pub spinner_knockback_bonus: f32,
    /// Extra damage a running spinner weapon deals to its opponent
    pub weapon_damage: f32,
    /// Symmetric damage applied on every colliding tick
    pub contact_damage: f32,
    /// How long a collision suppresses steering (seconds)
    pub stun_duration: f32,
    /// Per-tick chance an active weapon spins down
    pub weapon_decay_chance: f32,

    // === AI ===
    /// Per-tick chance a spinner AI spins its weapon up
    pub ai_weapon_chance: f32,
    /// Enemy turn rate as a fraction of the player's
    pub ai_turn_fraction: f32,
    /// Enemies only thrust within this bearing error (radians)
    pub ai_aim_tolerance: f32,
    /// Enemies spawned per match
    pub enemy_count: u32,
    /// Enemy thrust as a fraction of player thrust
    pub enemy_speed_scale: f32,
    /// Distance from the player at which enemies spawn
    pub spawn_radius: f32,

    // === Camera ===
    /// How far behind the player the camera target trails
    pub camera_follow_dist: f32,
    /// Per-tick lerp factor toward the camera target
    pub camera_smoothing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_half_size: 20.0,
            gap_width: 6.0,
            wall_bounce: 0.3,

            robot_radius: 1.0,
            max_health: 100.0,
            drive_accel: 60.0,
            turn_speed: 3.0,
            friction: 0.9,

            contact_scale: 2.1,
            separation_push: 0.4,
            knockback_base: 6.0,
            spinner_knockback_bonus: 6.0,
            weapon_damage: 15.0,
            contact_damage: 1.0,
            stun_duration: 0.3,
            weapon_decay_chance: 0.02,

            ai_weapon_chance: 0.01,
            ai_turn_fraction: 0.3,
            ai_aim_tolerance: 0.5,
            enemy_count: 3,
            enemy_speed_scale: 0.6,
            spawn_radius: 10.0,

            camera_follow_dist: 6.0,
            camera_smoothing: 0.08,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the full balance surface
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Distance between two robot centers at which they collide
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        self.contact_scale * self.robot_radius
    }

    /// Coordinate magnitude at which a solid wall clamps a robot
    #[inline]
    pub fn wall_limit(&self) -> f32 {
        self.arena_half_size - self.robot_radius
    }

    /// A wall constrains one axis only while the other-axis coordinate is
    /// below this (beyond it lies a corner gap)
    #[inline]
    pub fn solid_wall_extent(&self) -> f32 {
        self.arena_half_size - self.gap_width
    }
}
