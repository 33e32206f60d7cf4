//! Duel Pong - a single-screen paddle duel
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, opponent, scoring, match state)
//! - `input`: Pointer to paddle mapping
//! - `renderer`: Scene building and the WebGPU pipeline
//! - `audio`: Event to sound cue dispatch
//! - `game`: Frame scheduler that owns the state
//! - `tuning` / `settings`: Data-driven balance and player preferences

pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::{Frame, Game};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    use std::f32::consts::FRAC_PI_4;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Speed the ball never drops below (pixels per frame)
    pub const BALL_MIN_SPEED: f32 = 5.0;
    /// Speed cap applied on paddle hits
    pub const BALL_MAX_SPEED: f32 = 15.0;
    /// Added to the ball speed on every paddle hit
    pub const PADDLE_SPEED_INCREASE: f32 = 0.2;

    /// Chance of a random bounce after any wall or paddle hit
    pub const RANDOM_BOUNCE_CHANCE: f64 = 0.3;
    /// Random bounce angle limit around the horizontal
    pub const MAX_RANDOM_ANGLE: f32 = FRAC_PI_4;
    /// Paddle deflection at the very edge of a paddle
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_4;
    /// Launch angle limit around the horizontal
    pub const MAX_LAUNCH_ANGLE: f32 = FRAC_PI_4;

    /// Opponent responsiveness, fed through `ease_out_cubic`
    pub const OPPONENT_RESPONSIVENESS: f32 = 60.0;

    /// First to this many points ends the match
    pub const WIN_SCORE: u32 = 10;
    /// Opponent tally from which right exits go to the human
    pub const FORCED_OUTCOME_THRESHOLD: u32 = 9;
    /// Delay between the match ending and the result being announced
    pub const MATCH_OVER_DELAY_MS: f32 = 100.0;
}

/// Magnitude of a velocity
#[inline]
pub fn speed_of(vel: Vec2) -> f32 {
    vel.length()
}

/// Rescale a velocity so its magnitude is `speed`, keeping its direction.
///
/// Zero vectors have no direction; they come back pointing along +x.
#[inline]
pub fn with_speed(vel: Vec2, speed: f32) -> Vec2 {
    let len = vel.length();
    if len > f32::EPSILON {
        vel * (speed / len)
    } else {
        Vec2::new(speed, 0.0)
    }
}

/// Velocity of magnitude `speed` at `angle` from the +x axis (y down)
#[inline]
pub fn from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}

/// Cubic ease-out curve `1 - (1 - t)^3`
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_speed_keeps_direction() {
        let v = with_speed(Vec2::new(3.0, 4.0), 10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y - 8.0).abs() < 1e-5);
        assert!((speed_of(v) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_with_speed_zero_vector() {
        let v = with_speed(Vec2::ZERO, 5.0);
        assert_eq!(v, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_from_angle() {
        let v = from_angle(std::f32::consts::FRAC_PI_2, 2.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
        // Outside [0, 1] the curve keeps growing
        assert_eq!(ease_out_cubic(60.0), 205_380.0);
    }
}
