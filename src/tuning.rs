//! Data-driven game balance
//!
//! Every physics and match constant lives here so a JSON file can override any
//! subset of them. Missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,

    pub ball_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_increase: f32,

    /// Probability (0-1) of a random bounce after a wall or paddle hit
    pub random_bounce_chance: f64,
    /// Radians either side of horizontal for random bounces
    pub max_random_angle: f32,
    /// Radians of deflection when the ball hits a paddle edge
    pub max_bounce_angle: f32,
    /// Radians either side of horizontal for launches
    pub max_launch_angle: f32,

    /// Passed through `ease_out_cubic` as-is; values above 1 overshoot
    pub opponent_responsiveness: f32,

    pub win_score: u32,
    pub forced_outcome_threshold: u32,
    pub match_over_delay_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            speed_increase: PADDLE_SPEED_INCREASE,
            random_bounce_chance: RANDOM_BOUNCE_CHANCE,
            max_random_angle: MAX_RANDOM_ANGLE,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            max_launch_angle: MAX_LAUNCH_ANGLE,
            opponent_responsiveness: OPPONENT_RESPONSIVENESS,
            win_score: WIN_SCORE,
            forced_outcome_threshold: FORCED_OUTCOME_THRESHOLD,
            match_over_delay_ms: MATCH_OVER_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Highest legal paddle y
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Check the relationships the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::invalid("field", "dimensions must be positive"));
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::invalid("paddle", "dimensions must be positive"));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::invalid(
                "paddle_height",
                "paddle is taller than the field",
            ));
        }
        if self.paddle_width * 2.0 >= self.field_width {
            return Err(ConfigError::invalid(
                "paddle_width",
                "paddles overlap across the field",
            ));
        }
        if !(self.ball_radius > 0.0 && self.ball_radius * 2.0 < self.field_height) {
            return Err(ConfigError::invalid(
                "ball_radius",
                "ball must be positive and fit in the field",
            ));
        }
        if !(self.min_speed > 0.0) {
            return Err(ConfigError::invalid("min_speed", "must be positive"));
        }
        if self.max_speed < self.min_speed {
            return Err(ConfigError::invalid("max_speed", "must be >= min_speed"));
        }
        if self.speed_increase < 0.0 {
            return Err(ConfigError::invalid("speed_increase", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.random_bounce_chance) {
            return Err(ConfigError::invalid(
                "random_bounce_chance",
                "must be within 0..=1",
            ));
        }
        for (field, angle) in [
            ("max_random_angle", self.max_random_angle),
            ("max_bounce_angle", self.max_bounce_angle),
            ("max_launch_angle", self.max_launch_angle),
        ] {
            if !(0.0..std::f32::consts::FRAC_PI_2).contains(&angle) {
                return Err(ConfigError::invalid(field, "must be within 0..pi/2"));
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::invalid("win_score", "must be at least 1"));
        }
        if self.forced_outcome_threshold >= self.win_score {
            return Err(ConfigError::invalid(
                "forced_outcome_threshold",
                "must be below win_score",
            ));
        }
        if self.match_over_delay_ms < 0.0 {
            return Err(ConfigError::invalid(
                "match_over_delay_ms",
                "must not be negative",
            ));
        }
        Ok(())
    }
}
