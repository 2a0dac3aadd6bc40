//! Match state and robot entity types
//!
//! All state that must survive snapshot/restore for headless replay lives
//! here. Transient presentation data (the per-tick event list) is skipped.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::normalize_angle;
use crate::tuning::Tuning;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Robots are placed but the simulation has not been started
    NotStarted,
    /// Active combat
    Running,
    /// The player robot was destroyed
    Lost,
    /// Every enemy robot was destroyed
    Won,
}

impl MatchPhase {
    /// Terminal phases persist until an explicit reset
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchPhase::Lost | MatchPhase::Won)
    }
}

/// Combat role of a robot, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Spin-up weapon: bonus damage and knockback while it runs
    Spinner,
    /// Low ramp: shoves opponents harder
    Wedge,
    /// Heavy chassis: shrugs off knockback
    Tank,
}

/// Archetype-dependent combat and AI policy, resolved in one place
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    /// Scales knockback this robot imparts
    pub knockback_dealt: f32,
    /// Scales knockback this robot receives
    pub knockback_taken: f32,
    /// Whether AI control rolls the weapon on
    pub ai_spins_weapon: bool,
}

impl Archetype {
    /// Enemy archetypes cycle through this order around the spawn circle
    pub const ENEMY_CYCLE: [Archetype; 3] =
        [Archetype::Tank, Archetype::Wedge, Archetype::Spinner];

    pub fn profile(self) -> ArchetypeProfile {
        match self {
            Archetype::Spinner => ArchetypeProfile {
                knockback_dealt: 1.0,
                knockback_taken: 1.0,
                ai_spins_weapon: true,
            },
            Archetype::Wedge => ArchetypeProfile {
                knockback_dealt: 1.4,
                knockback_taken: 1.0,
                ai_spins_weapon: false,
            },
            Archetype::Tank => ArchetypeProfile {
                knockback_dealt: 1.0,
                knockback_taken: 0.6,
                ai_spins_weapon: false,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Spinner => "Spinner",
            Archetype::Wedge => "Wedge",
            Archetype::Tank => "Tank",
        }
    }
}

/// A robot entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: u32,
    pub is_player: bool,
    pub archetype: Archetype,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading angle in radians, independent of velocity
    pub facing: f32,
    pub health: f32,
    pub max_health: f32,
    /// Transient weapon state; spins down probabilistically each tick
    pub weapon_active: bool,
    /// Monotonic within a match; dead robots stay in the collection
    pub is_dead: bool,
    /// Simulation time (seconds) before which steering input is suppressed
    pub stunned_until: f32,
}

impl Robot {
    pub fn new(
        id: u32,
        is_player: bool,
        archetype: Archetype,
        pos: Vec2,
        facing: f32,
        max_health: f32,
    ) -> Self {
        Self {
            id,
            is_player,
            archetype,
            pos,
            vel: Vec2::ZERO,
            facing,
            health: max_health,
            max_health,
            weapon_active: false,
            is_dead: false,
            stunned_until: 0.0,
        }
    }

    /// Steering is suppressed while stunned; physics still integrates
    #[inline]
    pub fn is_stunned(&self, now: f32) -> bool {
        now < self.stunned_until
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn facing_dir(&self) -> Vec2 {
        Vec2::new(self.facing.cos(), self.facing.sin())
    }

    /// Apply damage, clamping health at zero and flagging death
    pub fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        if self.health <= 0.0 {
            self.is_dead = true;
        }
    }

    /// Destroy outright (pit fall), zeroing health
    pub fn kill(&mut self) {
        self.health = 0.0;
        self.is_dead = true;
    }
}

/// Serializable RNG state
///
/// Each draw derives a fresh PCG stream from the match seed and an
/// advancing counter, so a restored snapshot continues the exact sequence
/// without serializing generator internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Next uniform f32 in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.stream = self.stream.wrapping_add(1);
        let mut rng = Pcg32::new(self.seed, self.stream);
        rng.random::<f32>()
    }

    /// Bernoulli roll with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

/// Events from the most recent tick, for the render/audio frontend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Two robots traded a hit; `weapon_hit` when a spinner weapon connected
    Contact { a: u32, b: u32, weapon_hit: bool },
    WallBounce { id: u32 },
    PitFall { id: u32 },
    Destroyed { id: u32 },
    MatchOver { phase: MatchPhase },
}

/// Smoothed chase-camera rig, published for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraRig {
    pub pos: Vec2,
    pub target: Vec2,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Match seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: MatchPhase,
    /// Which archetype the player drives, preserved across resets
    pub player_archetype: Archetype,
    /// All robots, player first, in id order; dead ones stay until reset
    pub robots: Vec<Robot>,
    /// Chase camera (presentation-facing, the renderer may ignore it)
    pub camera: CameraRig,
    /// Balance constants for this match
    pub tuning: Tuning,
    /// Events from the most recent tick (transient)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl SimState {
    /// Create a match with the given seed; robots are placed but the phase
    /// stays NotStarted until `start` (or a restart input)
    pub fn new(seed: u64, player_archetype: Archetype, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: RngState::new(seed),
            time_ticks: 0,
            phase: MatchPhase::NotStarted,
            player_archetype,
            robots: Vec::new(),
            camera: CameraRig::default(),
            tuning,
            events: Vec::new(),
        };
        state.spawn_match();
        state
    }

    /// Simulation time in seconds
    #[inline]
    pub fn time_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }

    /// Begin combat from NotStarted
    pub fn start(&mut self) {
        if self.phase == MatchPhase::NotStarted {
            self.phase = MatchPhase::Running;
        }
    }

    /// Discard every robot, rebuild the match, and run
    pub fn reset(&mut self) {
        self.robots.clear();
        self.events.clear();
        self.time_ticks = 0;
        self.camera = CameraRig::default();
        self.spawn_match();
        self.phase = MatchPhase::Running;
        log::info!(
            "match reset: player {} vs {} enemies",
            self.player_archetype.as_str(),
            self.tuning.enemy_count
        );
    }

    /// One player at the center plus enemies evenly spaced on a circle
    /// around it, all created together; nothing spawns after this
    fn spawn_match(&mut self) {
        let t = &self.tuning;
        let mut robots = Vec::with_capacity(1 + t.enemy_count as usize);
        robots.push(Robot::new(
            0,
            true,
            self.player_archetype,
            Vec2::ZERO,
            0.0,
            t.max_health,
        ));
        for i in 0..t.enemy_count {
            let angle = TAU * i as f32 / t.enemy_count as f32;
            let pos = Vec2::new(angle.cos(), angle.sin()) * t.spawn_radius;
            let archetype = Archetype::ENEMY_CYCLE[i as usize % Archetype::ENEMY_CYCLE.len()];
            // Spawn facing the player at the center
            robots.push(Robot::new(
                i + 1,
                false,
                archetype,
                pos,
                normalize_angle(angle + PI),
                t.max_health,
            ));
        }
        self.robots = robots;
    }

    /// The player robot, if present (a missing player reads as a loss)
    pub fn player(&self) -> Option<&Robot> {
        self.robots.iter().find(|r| r.is_player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Robot> {
        self.robots.iter_mut().find(|r| r.is_player)
    }

    /// Alive non-player robots remaining
    pub fn enemies_alive(&self) -> usize {
        self.robots
            .iter()
            .filter(|r| !r.is_player && !r.is_dead)
            .count()
    }
}
