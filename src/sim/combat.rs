//! Pairwise collision detection, separation, knockback, and damage
//!
//! One pass over all unordered pairs of alive robots, in fixed id order.
//! This is the single place in a tick where later work intentionally reads
//! earlier in-tick mutation: a robot destroyed by an early pair no longer
//! collides in a later one, and separation shifts feed into later pair
//! distances. Everything else in the tick works from start-of-tick state.

use glam::Vec2;

use super::state::{Archetype, GameEvent, Robot};
use crate::tuning::Tuning;

/// Resolve every colliding pair among alive robots
pub fn resolve_collisions(
    robots: &mut [Robot],
    now: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let contact_dist = tuning.contact_distance();

    for i in 0..robots.len() {
        for j in (i + 1)..robots.len() {
            // Alive flags may have flipped earlier in this same pass
            if robots[i].is_dead || robots[j].is_dead {
                continue;
            }
            let delta = robots[i].pos - robots[j].pos;
            let dist = delta.length();
            if dist >= contact_dist {
                continue;
            }

            // Unit normal from j toward i; coincident centers fall back to +X
            let normal = if dist > f32::EPSILON {
                delta / dist
            } else {
                Vec2::X
            };
            resolve_pair(robots, i, j, normal, contact_dist - dist, now, tuning, events);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn resolve_pair(
    robots: &mut [Robot],
    i: usize,
    j: usize,
    normal: Vec2,
    penetration: f32,
    now: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    // Soft symmetric separation: one pass, not iterated to convergence
    let push = normal * (penetration * tuning.separation_push);
    robots[i].pos += push;
    robots[j].pos -= push;

    // A running spinner weapon sharpens the whole exchange
    let weapon_i = robots[i].archetype == Archetype::Spinner && robots[i].weapon_active;
    let weapon_j = robots[j].archetype == Archetype::Spinner && robots[j].weapon_active;
    let mut knockback = tuning.knockback_base;
    if weapon_i || weapon_j {
        knockback += tuning.spinner_knockback_bonus;
    }

    let profile_i = robots[i].archetype.profile();
    let profile_j = robots[j].archetype.profile();
    robots[i].vel += normal * knockback * profile_j.knockback_dealt * profile_i.knockback_taken;
    robots[j].vel -= normal * knockback * profile_i.knockback_dealt * profile_j.knockback_taken;

    // Contact grinds both sides; a weapon burns the opponent only
    let mut damage_i = tuning.contact_damage;
    let mut damage_j = tuning.contact_damage;
    if weapon_i {
        damage_j += tuning.weapon_damage;
    }
    if weapon_j {
        damage_i += tuning.weapon_damage;
    }
    robots[i].apply_damage(damage_i);
    robots[j].apply_damage(damage_j);

    // Mutual stun on any qualifying collision
    let until = now + tuning.stun_duration;
    robots[i].stunned_until = robots[i].stunned_until.max(until);
    robots[j].stunned_until = robots[j].stunned_until.max(until);

    events.push(GameEvent::Contact {
        a: robots[i].id,
        b: robots[j].id,
        weapon_hit: weapon_i || weapon_j,
    });
    if robots[i].is_dead {
        events.push(GameEvent::Destroyed { id: robots[i].id });
        log::debug!("robot {} destroyed in contact", robots[i].id);
    }
    if robots[j].is_dead {
        events.push(GameEvent::Destroyed { id: robots[j].id });
        log::debug!("robot {} destroyed in contact", robots[j].id);
    }
}
