//! Collision matching and the scoring/level transitions that follow from it.

use crate::stats::{BottomRemoval, GameStats, Settings};

/// Pairs every bullet with the aliens it overlaps.
///
/// Only bullets that hit something appear in the result. An alien is handed
/// to the first bullet that overlaps it and is not counted again.
pub fn group_collide<B, A>(
    bullets: &[B],
    aliens: &[A],
    mut overlaps: impl FnMut(&B, &A) -> bool,
) -> Vec<(B, Vec<A>)>
where
    B: Copy,
    A: Copy,
{
    let mut taken = vec![false; aliens.len()];
    let mut hits = Vec::new();

    for bullet in bullets {
        let mut struck = Vec::new();
        for (i, alien) in aliens.iter().enumerate() {
            if !taken[i] && overlaps(bullet, alien) {
                taken[i] = true;
                struck.push(*alien);
            }
        }
        if !struck.is_empty() {
            hits.push((*bullet, struck));
        }
    }
    hits
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Volley {
    pub points: u32,
    pub new_high_score: bool,
    pub level_up: bool,
}

/// Scores `aliens_hit` kills and, if that emptied the fleet, moves to the
/// next level.
pub fn resolve_volley(
    stats: &mut GameStats,
    settings: &mut Settings,
    aliens_hit: usize,
    aliens_remaining: usize,
) -> Volley {
    if aliens_hit == 0 {
        return Volley::default();
    }

    let points = settings.alien_points.saturating_mul(aliens_hit as u32);
    let new_high_score = stats.award(points);

    let level_up = aliens_remaining == 0;
    if level_up {
        settings.increase_speed();
        stats.level += 1;
    }

    Volley {
        points,
        new_high_score,
        level_up,
    }
}

/// Picks the aliens to drop once the bottom of the arena has been reached.
/// `fleet` holds every alien, oldest first, with whether it escaped.
pub fn aliens_to_remove<T: Copy>(fleet: &[(T, bool)], policy: BottomRemoval) -> Vec<T> {
    match policy {
        BottomRemoval::EscapedOnly => fleet
            .iter()
            .filter(|(_, escaped)| *escaped)
            .map(|(alien, _)| *alien)
            .collect(),
        BottomRemoval::FirstOfFleet => {
            if fleet.iter().any(|(_, escaped)| *escaped) {
                fleet.iter().take(1).map(|(alien, _)| *alien).collect()
            } else {
                Vec::new()
            }
        }
    }
}
