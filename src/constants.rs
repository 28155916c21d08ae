//! All of the constants used in the game

use bevy::prelude::*;

// Arena, centred on the origin
pub const LEFT_WALL: f32 = -450.;
pub const RIGHT_WALL: f32 = 450.;
pub const BOTTOM_WALL: f32 = -300.;
pub const TOP_WALL: f32 = 300.;
pub const ARENA_WIDTH: f32 = RIGHT_WALL - LEFT_WALL;
pub const ARENA_HEIGHT: f32 = TOP_WALL - BOTTOM_WALL;

// Sizes and coordinates
pub const SHIP_SIZE: Vec2 = Vec2::new(60.0, 24.0);
pub const GAP_BETWEEN_SHIP_AND_FLOOR: f32 = 30.0;
pub const BULLET_SIZE: Vec2 = Vec2::new(3.0, 15.0);
pub const ALIEN_SIZE: Vec2 = Vec2::new(60., 40.);

// Time the ship stays frozen after being hit
pub const RESPAWN_PAUSE_SECS: f32 = 0.5;

// Alien spawn delay bounds, in milliseconds
pub const MIN_SPAWN_DELAY_MS: u64 = 500;
pub const MAX_SPAWN_DELAY_MS: u64 = 2000;

// Text
pub const WINDOW_TITLE: &str = "Alien Invasion";
pub const SCOREBOARD_FONT_SIZE: f32 = 32.0;
pub const SCOREBOARD_TEXT_PADDING: Val = Val::Px(10.0);
pub const BUTTON_FONT_SIZE: f32 = 40.0;
pub const BUTTON_WIDTH: Val = Val::Px(200.0);
pub const BUTTON_HEIGHT: Val = Val::Px(50.0);

// Colours of objects and text
pub const BACKGROUND_COLOR: Color = Color::rgb(0.9, 0.9, 0.9);
pub const SHIP_COLOR: Color = Color::rgb(0.3, 0.3, 0.7);
pub const BULLET_COLOR: Color = Color::rgb(0.24, 0.24, 0.24);
pub const ALIEN_COLOR: Color = Color::rgb(0.2, 0.6, 0.3);
pub const TEXT_COLOR: Color = Color::rgb(0.12, 0.12, 0.12);
pub const BUTTON_COLOR: Color = Color::rgb(0.0, 0.8, 0.0);
pub const BUTTON_HOVER_COLOR: Color = Color::rgb(0.0, 0.65, 0.0);
pub const BUTTON_PRESSED_COLOR: Color = Color::rgb(0.0, 0.5, 0.0);
pub const BUTTON_TEXT_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

// Assets
pub const BACKGROUND_MUSIC: &str = "sounds/background_music.ogg";
