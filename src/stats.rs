//! Game settings and statistics.

use bevy::prelude::*;

/// What happens when an alien reaches the bottom of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BottomRemoval {
    /// Remove every alien that has escaped.
    #[default]
    EscapedOnly,
    /// Remove a single alien, the first in the fleet, whenever any alien
    /// has escaped. This is how the game originally behaved.
    FirstOfFleet,
}

#[derive(Resource, Debug, Clone)]
pub struct Settings {
    // Static settings
    pub ship_limit: u32,
    pub bullets_allowed: usize,
    pub speedup_scale: f32,
    pub score_scale: f32,
    pub bottom_removal: BottomRemoval,

    // Base speeds in pixels per second, before the difficulty scalar
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,

    // Dynamic settings, reset at the start of every game
    pub speed_multiplier: f32,
    pub alien_points: u32,
    pub fleet_direction: f32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings {
            ship_limit: 3,
            bullets_allowed: 3,
            speedup_scale: 1.1,
            score_scale: 1.5,
            bottom_removal: BottomRemoval::default(),
            ship_speed: 450.0,
            bullet_speed: 700.0,
            alien_speed: 120.0,
            fleet_drop_speed: 60.0,
            speed_multiplier: 1.0,
            alien_points: 50,
            fleet_direction: 1.0,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    pub fn initialize_dynamic_settings(&mut self) {
        self.speed_multiplier = 1.0;
        self.alien_points = 50;
        self.fleet_direction = 1.0;
    }

    /// Raises the difficulty scalar and the value of each alien.
    pub fn increase_speed(&mut self) {
        self.speed_multiplier *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    pub fn current_ship_speed(&self) -> f32 {
        self.ship_speed * self.speed_multiplier
    }

    pub fn current_bullet_speed(&self) -> f32 {
        self.bullet_speed * self.speed_multiplier
    }

    pub fn current_alien_speed(&self) -> f32 {
        self.alien_speed * self.speed_multiplier
    }

    pub fn current_drop_speed(&self) -> f32 {
        self.fleet_drop_speed * self.speed_multiplier
    }
}

/// Outcome of the ship colliding with an alien.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipHit {
    LifeLost { ships_left: u32 },
    GameOver,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score: 0,
            game_active: false,
        }
    }

    /// Resets everything a new game starts from. The high score is kept.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn ship_hit(&mut self) -> ShipHit {
        self.ships_left = self.ships_left.saturating_sub(1);
        if self.ships_left > 0 {
            ShipHit::LifeLost {
                ships_left: self.ships_left,
            }
        } else {
            self.game_active = false;
            ShipHit::GameOver
        }
    }

    /// Adds points and returns true if they set a new high score.
    pub fn award(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        self.check_high_score()
    }

    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
