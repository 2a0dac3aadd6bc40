//! Scrap Rumble headless demo
//!
//! Runs a seeded match with a scripted driver standing in for the real
//! frontend: the player chases the nearest live enemy with the weapon held.
//! Useful for balance smoke-testing without a renderer attached.

use scrap_rumble::Tuning;
use scrap_rumble::consts::SIM_DT;
use scrap_rumble::normalize_angle;
use scrap_rumble::sim::{Archetype, GameEvent, MatchPhase, SimState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let mut state = SimState::new(seed, Archetype::Spinner, Tuning::default());
    state.start();
    log::info!(
        "seed {seed}: {} robots, arena half-size {}",
        state.robots.len(),
        state.tuning.arena_half_size
    );

    // Two minutes of simulated time is plenty for a match to resolve
    let max_ticks = 120 * 60;
    while state.phase == MatchPhase::Running && state.time_ticks < max_ticks {
        let input = scripted_input(&state);
        tick(&mut state, &input, SIM_DT);

        for event in &state.events {
            match event {
                GameEvent::Destroyed { id } => log::info!("robot {id} destroyed"),
                GameEvent::PitFall { id } => log::info!("robot {id} fell into a pit"),
                _ => log::trace!("{event:?}"),
            }
        }
        if state.time_ticks % 300 == 0 {
            let player = state.player().map(|p| p.health).unwrap_or(0.0);
            log::info!(
                "t={:.1}s player hp {:.0}, {} enemies alive",
                state.time_secs(),
                player,
                state.enemies_alive()
            );
        }
    }

    let outcome = match state.phase {
        MatchPhase::Won => "player wins",
        MatchPhase::Lost => "player destroyed",
        _ => "time limit reached",
    };
    println!(
        "{} after {:.1}s ({} ticks)",
        outcome,
        state.time_secs(),
        state.time_ticks
    );
}

/// Point at the nearest live enemy, drive once roughly aligned, and keep
/// the weapon trigger held
fn scripted_input(state: &SimState) -> TickInput {
    let Some(player) = state.player() else {
        return TickInput::default();
    };
    let Some(target) = state
        .robots
        .iter()
        .filter(|r| !r.is_player && !r.is_dead)
        .min_by(|a, b| {
            let da = (a.pos - player.pos).length();
            let db = (b.pos - player.pos).length();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return TickInput::default();
    };

    let to_target = target.pos - player.pos;
    let diff = normalize_angle(to_target.y.atan2(to_target.x) - player.facing);

    TickInput {
        turn_left: diff > 0.05,
        turn_right: diff < -0.05,
        forward: diff.abs() < 0.6,
        reverse: false,
        weapon: true,
        restart: false,
    }
}
