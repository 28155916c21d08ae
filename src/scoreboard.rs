//! Score, high score, level and remaining ships, drawn as UI text.

use bevy::prelude::*;

use crate::components::*;
use crate::constants::*;
use crate::stats::GameStats;

/// Rounds to the nearest ten, ties to even tens, and inserts thousands
/// separators.
pub fn format_score(score: u32) -> String {
    let (tens, ones) = (score as u64 / 10, score as u64 % 10);
    let rounded = if ones > 5 || (ones == 5 && tens % 2 == 1) {
        (tens + 1) * 10
    } else {
        tens * 10
    };
    let digits = rounded.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

fn text_style() -> TextStyle {
    TextStyle {
        font_size: SCOREBOARD_FONT_SIZE,
        color: TEXT_COLOR,
        ..default()
    }
}

pub fn setup_scoreboard(mut commands: Commands) {
    commands.spawn((
        TextBundle::from_section("0", text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            top: SCOREBOARD_TEXT_PADDING,
            right: SCOREBOARD_TEXT_PADDING,
            ..default()
        }),
        ScoreText,
    ));

    commands.spawn((
        TextBundle::from_section("Level 1", text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(SCOREBOARD_FONT_SIZE + 20.0),
            right: SCOREBOARD_TEXT_PADDING,
            ..default()
        }),
        LevelText,
    ));

    commands.spawn((
        TextBundle::from_section("Ships: 0", text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            top: SCOREBOARD_TEXT_PADDING,
            left: SCOREBOARD_TEXT_PADDING,
            ..default()
        }),
        ShipsText,
    ));

    // The high score sits in a full-width row so it can be centred
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                top: SCOREBOARD_TEXT_PADDING,
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((TextBundle::from_section("0", text_style()), HighScoreText));
        });
}

pub fn update_scoreboard(
    stats: Res<GameStats>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
    mut high_score_query: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
    mut level_query: Query<
        &mut Text,
        (With<LevelText>, Without<ScoreText>, Without<HighScoreText>),
    >,
    mut ships_query: Query<
        &mut Text,
        (
            With<ShipsText>,
            Without<ScoreText>,
            Without<HighScoreText>,
            Without<LevelText>,
        ),
    >,
) {
    if !stats.is_changed() {
        return;
    }
    for mut text in &mut score_query {
        text.sections[0].value = format_score(stats.score);
    }
    for mut text in &mut high_score_query {
        text.sections[0].value = format_score(stats.high_score);
    }
    for mut text in &mut level_query {
        text.sections[0].value = format!("Level {}", stats.level);
    }
    for mut text in &mut ships_query {
        text.sections[0].value = format!("Ships: {}", stats.ships_left);
    }
}
