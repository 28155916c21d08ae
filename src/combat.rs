//! The ship, its bullets, and everything that collides with them.

use bevy::{prelude::*, sprite::collide_aabb::collide, window::PrimaryWindow};

use crate::components::*;
use crate::constants::*;
use crate::fleet::{now_ms, spawn_fleet, FleetSpawner};
use crate::rules::{group_collide, resolve_volley};
use crate::spawn_timer::AlienSpawnTimer;
use crate::stats::{GameStats, Settings, ShipHit};
use crate::GameState;

/// Freezes gameplay for a moment after the ship is hit.
#[derive(Resource, Default)]
pub struct RespawnPause {
    timer: Option<Timer>,
}

impl RespawnPause {
    pub fn start(&mut self) {
        self.timer = Some(Timer::from_seconds(RESPAWN_PAUSE_SECS, TimerMode::Once));
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_some()
    }
}

/// Run condition for everything that moves.
pub fn gameplay_running(pause: Res<RespawnPause>) -> bool {
    !pause.is_paused()
}

/// Stops gameplay on the tick the last ship is lost, before the state
/// transition to `Inactive` has been applied.
pub fn game_active(stats: Res<GameStats>) -> bool {
    stats.game_active
}

pub fn tick_respawn_pause(mut pause: ResMut<RespawnPause>, time: Res<Time>) {
    let finished = match pause.timer.as_mut() {
        Some(timer) => timer.tick(time.delta()).finished(),
        None => return,
    };
    if finished {
        pause.timer = None;
    }
}

// Use keyboard input to move the ship
pub fn move_ship(
    keyboard_input: Res<Input<KeyCode>>,
    settings: Res<Settings>,
    mut query: Query<&mut Transform, With<Ship>>,
    time: Res<Time>,
) {
    let Ok(mut ship_transform) = query.get_single_mut() else {
        return;
    };
    let mut direction = 0.0;

    if keyboard_input.pressed(KeyCode::Left) {
        direction -= 1.0;
    }

    if keyboard_input.pressed(KeyCode::Right) {
        direction += 1.0;
    }

    let new_ship_position = ship_transform.translation.x
        + direction * settings.current_ship_speed() * time.delta_seconds();

    let left_bound = LEFT_WALL + SHIP_SIZE.x / 2.0;
    let right_bound = RIGHT_WALL - SHIP_SIZE.x / 2.0;

    ship_transform.translation.x = new_ship_position.clamp(left_bound, right_bound);
}

pub fn fire_bullet(
    mut commands: Commands,
    keyboard_input: Res<Input<KeyCode>>,
    settings: Res<Settings>,
    ship_query: Query<&Transform, With<Ship>>,
    bullet_query: Query<(), With<Bullet>>,
) {
    if !keyboard_input.just_pressed(KeyCode::Space) {
        return;
    }
    if bullet_query.iter().count() >= settings.bullets_allowed {
        return;
    }
    let Ok(ship_transform) = ship_query.get_single() else {
        return;
    };
    commands.spawn(BulletBundle::fired_from(
        ship_transform.translation,
        settings.current_bullet_speed(),
    ));
}

// Apply velocity to any entity with the Velocity component
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    for (mut transform, velocity) in &mut query {
        transform.translation.x += velocity.x * time.delta_seconds();
        transform.translation.y += velocity.y * time.delta_seconds();
    }
}

pub fn despawn_offscreen_bullets(
    mut commands: Commands,
    query: Query<(Entity, &Transform), With<Bullet>>,
) {
    for (bullet, transform) in &query {
        if transform.translation.y - BULLET_SIZE.y / 2.0 >= TOP_WALL {
            commands.entity(bullet).despawn();
        }
    }
}

fn overlaps(a: &Transform, b: &Transform) -> bool {
    collide(
        a.translation,
        a.scale.truncate(),
        b.translation,
        b.scale.truncate(),
    )
    .is_some()
}

#[allow(clippy::too_many_arguments)]
pub fn check_bullet_alien_collisions(
    mut commands: Commands,
    mut stats: ResMut<GameStats>,
    mut settings: ResMut<Settings>,
    mut spawner: ResMut<FleetSpawner>,
    mut spawn_timer: ResMut<AlienSpawnTimer>,
    time: Res<Time>,
    bullet_query: Query<(Entity, &Transform), With<Bullet>>,
    alien_query: Query<(Entity, &Transform), With<Alien>>,
) {
    let bullets: Vec<(Entity, &Transform)> = bullet_query.iter().collect();
    let aliens: Vec<(Entity, &Transform)> = alien_query.iter().collect();

    let hits = group_collide(&bullets, &aliens, |(_, bullet), (_, alien)| {
        overlaps(bullet, alien)
    });
    if hits.is_empty() {
        return;
    }

    let mut aliens_hit = 0;
    for ((bullet, _), struck) in &hits {
        commands.entity(*bullet).despawn();
        for (alien, _) in struck {
            commands.entity(*alien).despawn();
        }
        aliens_hit += struck.len();
    }

    let remaining = aliens.len() - aliens_hit;
    let volley = resolve_volley(&mut stats, &mut settings, aliens_hit, remaining);
    if volley.new_high_score {
        debug!("new high score: {}", stats.high_score);
    }

    if volley.level_up {
        info!("fleet destroyed, advancing to level {}", stats.level);
        let already_gone: Vec<Entity> = hits.iter().map(|((bullet, _), _)| *bullet).collect();
        for (bullet, _) in &bullets {
            if !already_gone.contains(bullet) {
                commands.entity(*bullet).despawn();
            }
        }
        spawn_fleet(&mut commands, &mut spawner, &mut spawn_timer, now_ms(&time));
    }
}

#[allow(clippy::too_many_arguments)]
pub fn check_ship_alien_collisions(
    mut commands: Commands,
    mut stats: ResMut<GameStats>,
    mut pause: ResMut<RespawnPause>,
    mut next_state: ResMut<NextState<GameState>>,
    mut ship_query: Query<&mut Transform, With<Ship>>,
    alien_query: Query<(Entity, &Transform), (With<Alien>, Without<Ship>)>,
    bullet_query: Query<Entity, With<Bullet>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut ship_transform) = ship_query.get_single_mut() else {
        return;
    };
    let ship_hit = alien_query
        .iter()
        .any(|(_, alien_transform)| overlaps(&ship_transform, alien_transform));
    if !ship_hit {
        return;
    }

    for (alien, _) in &alien_query {
        commands.entity(alien).despawn();
    }
    for bullet in &bullet_query {
        commands.entity(bullet).despawn();
    }
    ship_transform.translation = ship_start_position();

    match stats.ship_hit() {
        ShipHit::LifeLost { ships_left } => {
            info!("ship hit, {} ships left", ships_left);
            pause.start();
        }
        ShipHit::GameOver => {
            info!("game over, final score {}", stats.score);
            next_state.set(GameState::Inactive);
            for mut window in &mut windows {
                window.cursor.visible = true;
            }
        }
    }
}
