//! Alien Invasion: shoot the aliens down before they reach the ground.

use bevy::{
    audio::PlaybackSettings,
    log::{Level, LogPlugin},
    prelude::*,
};
use crate::combat::*;
use crate::components::*;
use crate::constants::*;
use crate::fleet::*;
use crate::menu::*;
use crate::scoreboard::*;
use crate::spawn_timer::AlienSpawnTimer;
use crate::stats::{GameStats, Settings};

fn main() {
    let settings = Settings::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.into(),
                        resolution: (ARENA_WIDTH, ARENA_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,alien_invasion=debug".into(),
                    level: Level::INFO,
                }),
        )
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(GameStats::new(&settings))
        .insert_resource(settings)
        .init_resource::<AlienSpawnTimer>()
        .init_resource::<FleetSpawner>()
        .init_resource::<RespawnPause>()
        .add_state::<GameState>()
        .add_systems(Startup, (setup, setup_scoreboard))
        .add_systems(OnEnter(GameState::Inactive), spawn_play_button)
        .add_systems(OnExit(GameState::Inactive), despawn_play_button)
        .add_systems(OnEnter(GameState::Active), start_game)
        .add_systems(
            Update,
            play_button.run_if(in_state(GameState::Inactive)),
        )
        .add_systems(
            Update,
            fire_bullet
                .run_if(in_state(GameState::Active))
                .run_if(game_active)
                .run_if(gameplay_running),
        )
        .add_systems(
            FixedUpdate,
            tick_respawn_pause.run_if(in_state(GameState::Active)),
        )
        .add_systems(
            FixedUpdate,
            (
                move_ship,
                spawn_aliens,
                apply_velocity,
                despawn_offscreen_bullets,
                apply_deferred,
                check_bullet_alien_collisions,
                apply_deferred,
                move_aliens,
                check_ship_alien_collisions,
                apply_deferred,
                check_aliens_bottom,
            )
                .chain()
                .run_if(in_state(GameState::Active))
                .run_if(game_active)
                .run_if(gameplay_running),
        )
        // apply to all states
        .add_systems(
            Update,
            (update_scoreboard, quit_on_q, bevy::window::close_on_esc),
        )
        .run();
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    #[default]
    Inactive,
    Active,
}

impl States for GameState {}

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Camera
    commands.spawn(Camera2dBundle::default());

    // Ship
    commands.spawn(ShipBundle::new());

    // Background music, looped for as long as the game is open
    commands.spawn(AudioBundle {
        source: asset_server.load(BACKGROUND_MUSIC),
        settings: PlaybackSettings::LOOP,
    });
}

mod combat;
mod components;
mod constants;
mod fleet;
mod menu;
mod rules;
mod scoreboard;
mod spawn_timer;
mod stats;
