//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (robots in id order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod combat;
pub mod state;
pub mod steering;
pub mod tick;

pub use state::{
    Archetype, ArchetypeProfile, CameraRig, GameEvent, MatchPhase, RngState, Robot, SimState,
};
pub use tick::{TickInput, tick};
