//! Spawning, moving and culling the alien fleet.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::*;
use crate::constants::*;
use crate::rules::aliens_to_remove;
use crate::spawn_timer::AlienSpawnTimer;
use crate::stats::Settings;

/// Decides where the next alien appears and numbers aliens in spawn order.
#[derive(Resource)]
pub struct FleetSpawner {
    rng: StdRng,
    next_serial: u64,
}

impl FleetSpawner {
    pub fn seeded(seed: u64) -> Self {
        FleetSpawner {
            rng: StdRng::seed_from_u64(seed),
            next_serial: 0,
        }
    }

    fn next_alien(&mut self) -> (u32, AlienBundle) {
        let column = self.rng.gen_range(0..=last_column(ARENA_WIDTH, ALIEN_SIZE.x));
        let serial = self.next_serial;
        self.next_serial += 1;
        (column, AlienBundle::at(column_position(column), serial))
    }
}

impl Default for FleetSpawner {
    fn default() -> Self {
        FleetSpawner {
            rng: StdRng::from_entropy(),
            next_serial: 0,
        }
    }
}

/// Highest column index an alien may spawn in, spacing aliens one alien
/// width apart with a one-alien margin on the left.
pub fn last_column(arena_width: f32, alien_width: f32) -> u32 {
    let available_space_x = arena_width - 2.0 * alien_width;
    (available_space_x / (2.0 * alien_width)).floor().max(0.0) as u32
}

/// Centre of a top-row alien in `column`.
pub fn column_position(column: u32) -> Vec2 {
    let left = LEFT_WALL + ALIEN_SIZE.x + 2.0 * ALIEN_SIZE.x * column as f32;
    let top = TOP_WALL - ALIEN_SIZE.y;
    Vec2::new(left + ALIEN_SIZE.x / 2.0, top - ALIEN_SIZE.y / 2.0)
}

/// An alien has escaped once its top edge reaches the bottom of the arena.
pub fn has_escaped(translation: Vec3) -> bool {
    translation.y + ALIEN_SIZE.y / 2.0 <= BOTTOM_WALL
}

/// Spawns one alien in a random top-row column.
pub fn spawn_alien(commands: &mut Commands, spawner: &mut FleetSpawner) {
    let (column, alien) = spawner.next_alien();
    debug!("alien spawned in column {}", column);
    commands.spawn(alien);
}

/// Puts a new fleet on screen and restarts the spawn gate at `now_ms`, so the
/// timer only adds aliens after a full delay.
pub fn spawn_fleet(
    commands: &mut Commands,
    spawner: &mut FleetSpawner,
    spawn_timer: &mut AlienSpawnTimer,
    now_ms: u64,
) {
    spawn_timer.0.restart(now_ms);
    spawn_alien(commands, spawner);
}

/// Milliseconds on the clock the spawn gate runs on.
pub fn now_ms(time: &Time) -> u64 {
    time.elapsed().as_millis() as u64
}

pub fn spawn_aliens(
    mut commands: Commands,
    mut spawn_timer: ResMut<AlienSpawnTimer>,
    mut spawner: ResMut<FleetSpawner>,
    time: Res<Time>,
) {
    if spawn_timer.0.should_spawn(now_ms(&time)) {
        debug!(
            "alien spawn at {} ms, next one in {} ms",
            spawn_timer.0.last_spawn_ms(),
            spawn_timer.0.delay_ms()
        );
        spawn_alien(&mut commands, &mut spawner);
    }
}

/// Drifts the fleet sideways, bouncing off the side walls, while it drops.
pub fn move_aliens(
    mut settings: ResMut<Settings>,
    mut query: Query<&mut Transform, With<Alien>>,
    time: Res<Time>,
) {
    let dt = time.delta_seconds();
    let dx = settings.current_alien_speed() * settings.fleet_direction * dt;
    let dy = settings.current_drop_speed() * dt;

    let mut at_edge = false;
    for mut transform in &mut query {
        transform.translation.x += dx;
        transform.translation.y -= dy;

        let half_width = ALIEN_SIZE.x / 2.0;
        let x = transform.translation.x;
        if (settings.fleet_direction > 0.0 && x + half_width >= RIGHT_WALL)
            || (settings.fleet_direction < 0.0 && x - half_width <= LEFT_WALL)
        {
            at_edge = true;
        }
    }

    if at_edge {
        settings.fleet_direction = -settings.fleet_direction;
    }
}

pub fn check_aliens_bottom(
    mut commands: Commands,
    settings: Res<Settings>,
    query: Query<(Entity, &Alien, &Transform)>,
) {
    let mut fleet: Vec<(u64, Entity, bool)> = query
        .iter()
        .map(|(entity, alien, transform)| {
            (alien.serial, entity, has_escaped(transform.translation))
        })
        .collect();
    // Query order is storage order, which shuffles on despawn
    fleet.sort_unstable_by_key(|(serial, _, _)| *serial);
    let fleet: Vec<(Entity, bool)> = fleet
        .into_iter()
        .map(|(_, entity, escaped)| (entity, escaped))
        .collect();

    for alien in aliens_to_remove(&fleet, settings.bottom_removal) {
        info!("an alien reached the bottom");
        commands.entity(alien).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BottomRemoval;
    use std::time::Duration;

    #[test]
    fn columns_leave_a_margin_on_both_sides() {
        let last = last_column(ARENA_WIDTH, ALIEN_SIZE.x);
        assert_eq!(last, 6);

        let first = column_position(0);
        assert_eq!(first.x - ALIEN_SIZE.x / 2.0, LEFT_WALL + ALIEN_SIZE.x);

        let rightmost = column_position(last);
        assert!(rightmost.x + ALIEN_SIZE.x / 2.0 <= RIGHT_WALL);
    }

    #[test]
    fn aliens_spawn_one_height_below_the_top() {
        let position = column_position(3);
        assert_eq!(position.y + ALIEN_SIZE.y / 2.0, TOP_WALL - ALIEN_SIZE.y);
    }

    #[test]
    fn narrow_arena_has_a_single_column() {
        assert_eq!(last_column(100.0, 60.0), 0);
    }

    #[test]
    fn escape_is_measured_from_the_top_edge() {
        let half = ALIEN_SIZE.y / 2.0;
        assert!(!has_escaped(Vec3::new(0.0, BOTTOM_WALL, 0.0)));
        assert!(has_escaped(Vec3::new(0.0, BOTTOM_WALL - half, 0.0)));
    }

    #[test]
    fn spawned_aliens_stay_inside_the_arena() {
        let mut app = App::new();
        app.insert_resource(FleetSpawner::seeded(9))
            .add_systems(Update, |mut commands: Commands, mut spawner: ResMut<FleetSpawner>| {
                for _ in 0..50 {
                    spawn_alien(&mut commands, &mut spawner);
                }
            });
        app.update();

        let mut aliens = app.world.query::<(&Alien, &Transform)>();
        let mut serials = Vec::new();
        for (alien, transform) in aliens.iter(&app.world) {
            let position = transform.translation;
            assert!(position.x - ALIEN_SIZE.x / 2.0 >= LEFT_WALL);
            assert!(position.x + ALIEN_SIZE.x / 2.0 <= RIGHT_WALL);
            serials.push(alien.serial);
        }
        serials.sort_unstable();
        assert_eq!(serials, (0..50).collect::<Vec<u64>>());
    }

    fn bottom_app(policy: BottomRemoval) -> App {
        let settings = Settings {
            bottom_removal: policy,
            ..Settings::default()
        };
        let mut app = App::new();
        app.insert_resource(settings)
            .add_systems(Update, check_aliens_bottom);
        app
    }

    #[test]
    fn bottom_check_removes_escaped_aliens() {
        let mut app = bottom_app(BottomRemoval::EscapedOnly);
        let safe = app.world.spawn(AlienBundle::at(Vec2::new(0.0, 0.0), 0)).id();
        let gone = app
            .world
            .spawn(AlienBundle::at(Vec2::new(100.0, BOTTOM_WALL - ALIEN_SIZE.y), 1))
            .id();

        app.update();

        assert!(app.world.get_entity(safe).is_some());
        assert!(app.world.get_entity(gone).is_none());
    }

    #[test]
    fn first_of_fleet_removes_the_oldest_alien() {
        let mut app = bottom_app(BottomRemoval::FirstOfFleet);
        // Stored first, but spawned after `oldest`
        let escaped = app
            .world
            .spawn(AlienBundle::at(Vec2::new(100.0, BOTTOM_WALL - ALIEN_SIZE.y), 7))
            .id();
        let oldest = app.world.spawn(AlienBundle::at(Vec2::new(0.0, 0.0), 2)).id();
        let newer = app.world.spawn(AlienBundle::at(Vec2::new(-100.0, 0.0), 9)).id();

        app.update();

        assert!(app.world.get_entity(oldest).is_none());
        assert!(app.world.get_entity(escaped).is_some());
        assert!(app.world.get_entity(newer).is_some());
    }

    fn movement_app(settings: Settings, step: Duration) -> App {
        let mut app = App::new();
        app.insert_resource(settings)
            .insert_resource(Time::<()>::default())
            .add_systems(Update, move_aliens);
        app.world.resource_mut::<Time>().advance_by(step);
        app
    }

    #[test]
    fn aliens_drift_and_drop_with_difficulty() {
        let settings = Settings {
            speed_multiplier: 2.0,
            ..Settings::default()
        };
        let (drift, drop) = (
            settings.current_alien_speed() * 0.1,
            settings.current_drop_speed() * 0.1,
        );
        let mut app = movement_app(settings, Duration::from_millis(100));
        let alien = app.world.spawn(AlienBundle::at(Vec2::new(0.0, 0.0), 0)).id();

        app.update();

        let position = app.world.get::<Transform>(alien).map(|t| t.translation);
        let position = position.unwrap_or(Vec3::NAN);
        assert!((position.x - drift).abs() < 1e-3, "x = {}", position.x);
        assert!((position.y + drop).abs() < 1e-3, "y = {}", position.y);
        assert!((drop - 12.0).abs() < 1e-3);
        assert_eq!(app.world.resource::<Settings>().fleet_direction, 1.0);
    }

    #[test]
    fn fleet_turns_around_at_the_side_wall() {
        let mut app = movement_app(Settings::default(), Duration::from_millis(100));
        let alien = app
            .world
            .spawn(AlienBundle::at(Vec2::new(RIGHT_WALL - ALIEN_SIZE.x / 2.0, 0.0), 0))
            .id();

        app.update();
        assert_eq!(app.world.resource::<Settings>().fleet_direction, -1.0);
        let after_bounce = app.world.get::<Transform>(alien).map(|t| t.translation);
        let after_bounce = after_bounce.unwrap_or(Vec3::NAN);
        assert!(after_bounce.y < 0.0);

        app.world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(100));
        app.update();
        let x = app.world.get::<Transform>(alien).map_or(f32::NAN, |t| t.translation.x);
        assert!(x < after_bounce.x);
        assert_eq!(app.world.resource::<Settings>().fleet_direction, -1.0);
    }
}
