//! The Play button and starting a new game.

use bevy::{app::AppExit, prelude::*, window::PrimaryWindow};

use crate::combat::RespawnPause;
use crate::components::*;
use crate::constants::*;
use crate::fleet::{now_ms, spawn_fleet, FleetSpawner};
use crate::spawn_timer::AlienSpawnTimer;
use crate::stats::{GameStats, Settings};
use crate::GameState;

pub fn spawn_play_button(mut commands: Commands) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                ..default()
            },
            PlayButton,
        ))
        .with_children(|parent| {
            parent
                .spawn(ButtonBundle {
                    style: Style {
                        width: BUTTON_WIDTH,
                        height: BUTTON_HEIGHT,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    background_color: BUTTON_COLOR.into(),
                    ..default()
                })
                .with_children(|button| {
                    button.spawn(TextBundle::from_section(
                        "Play",
                        TextStyle {
                            font_size: BUTTON_FONT_SIZE,
                            color: BUTTON_TEXT_COLOR,
                            ..default()
                        },
                    ));
                });
        });
}

pub fn despawn_play_button(mut commands: Commands, query: Query<Entity, With<PlayButton>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// Clicking Play, or pressing return, starts a game
pub fn play_button(
    keyboard_input: Res<Input<KeyCode>>,
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut pressed = keyboard_input.just_pressed(KeyCode::Return);
    for (interaction, mut color) in &mut interaction_query {
        *color = match *interaction {
            Interaction::Pressed => {
                pressed = true;
                BUTTON_PRESSED_COLOR.into()
            }
            Interaction::Hovered => BUTTON_HOVER_COLOR.into(),
            Interaction::None => BUTTON_COLOR.into(),
        };
    }
    if pressed {
        next_state.set(GameState::Active);
    }
}

/// Resets settings, stats and the board, then puts the first alien on screen.
#[allow(clippy::too_many_arguments)]
pub fn start_game(
    mut commands: Commands,
    mut settings: ResMut<Settings>,
    mut stats: ResMut<GameStats>,
    mut pause: ResMut<RespawnPause>,
    mut spawner: ResMut<FleetSpawner>,
    mut spawn_timer: ResMut<AlienSpawnTimer>,
    time: Res<Time>,
    mut ship_query: Query<&mut Transform, With<Ship>>,
    board_query: Query<Entity, Or<(With<Alien>, With<Bullet>)>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    settings.initialize_dynamic_settings();
    stats.reset_stats(&settings);
    stats.game_active = true;
    *pause = RespawnPause::default();

    for entity in &board_query {
        commands.entity(entity).despawn();
    }
    spawn_fleet(&mut commands, &mut spawner, &mut spawn_timer, now_ms(&time));
    for mut ship_transform in &mut ship_query {
        ship_transform.translation = ship_start_position();
    }
    for mut window in &mut windows {
        window.cursor.visible = false;
    }
    info!("new game started");
}

pub fn quit_on_q(keyboard_input: Res<Input<KeyCode>>, mut app_exit: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Q) {
        app_exit.send(AppExit);
    }
}
