//! The components used in the game

use bevy::prelude::*;
use crate::constants::*;

#[derive(Component)]
pub struct Ship;

#[derive(Component)]
pub struct Bullet;

/// `serial` counts up from zero in spawn order.
#[derive(Component)]
pub struct Alien {
    pub serial: u64,
}

#[derive(Component, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

#[derive(Component)]
pub struct PlayButton;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HighScoreText;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct ShipsText;

/// Where the ship rests at the start of every life.
pub fn ship_start_position() -> Vec3 {
    Vec3::new(0.0, BOTTOM_WALL + GAP_BETWEEN_SHIP_AND_FLOOR + SHIP_SIZE.y / 2.0, 0.0)
}

#[derive(Bundle)]
pub struct ShipBundle {
    sprite_bundle: SpriteBundle,
    ship: Ship,
}

impl ShipBundle {
    pub fn new() -> ShipBundle {
        ShipBundle {
            sprite_bundle: SpriteBundle {
                // The z-scale of 2D objects must always be 1.0,
                // or their ordering will be affected in surprising ways.
                transform: Transform {
                    translation: ship_start_position(),
                    scale: SHIP_SIZE.extend(1.0),
                    ..default()
                },
                sprite: Sprite {
                    color: SHIP_COLOR,
                    ..default()
                },
                ..default()
            },
            ship: Ship,
        }
    }
}

#[derive(Bundle)]
pub struct BulletBundle {
    sprite_bundle: SpriteBundle,
    bullet: Bullet,
    velocity: Velocity,
}

impl BulletBundle {
    /// A bullet leaving the top of a ship at `ship_position`.
    pub fn fired_from(ship_position: Vec3, speed: f32) -> BulletBundle {
        let start = Vec3::new(
            ship_position.x,
            ship_position.y + SHIP_SIZE.y / 2.0 + BULLET_SIZE.y / 2.0,
            0.0,
        );
        BulletBundle {
            sprite_bundle: SpriteBundle {
                transform: Transform {
                    translation: start,
                    scale: BULLET_SIZE.extend(1.0),
                    ..default()
                },
                sprite: Sprite {
                    color: BULLET_COLOR,
                    ..default()
                },
                ..default()
            },
            bullet: Bullet,
            velocity: Velocity(Vec2::new(0.0, speed)),
        }
    }
}

#[derive(Bundle)]
pub struct AlienBundle {
    sprite_bundle: SpriteBundle,
    alien: Alien,
}

impl AlienBundle {
    pub fn at(position: Vec2, serial: u64) -> AlienBundle {
        AlienBundle {
            sprite_bundle: SpriteBundle {
                transform: Transform {
                    translation: position.extend(0.0),
                    scale: ALIEN_SIZE.extend(1.0),
                    ..default()
                },
                sprite: Sprite {
                    color: ALIEN_COLOR,
                    ..default()
                },
                ..default()
            },
            alien: Alien { serial },
        }
    }
}
