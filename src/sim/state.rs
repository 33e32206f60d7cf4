//! Game state and core simulation types
//!
//! Everything the update phase touches lives in [`GameState`], owned by the
//! frame scheduler and passed by reference to each system.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::{from_angle, speed_of, with_speed};

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left edge
    Human,
    /// Scripted paddle on the right edge
    Opponent,
}

impl Side {
    /// Name shown to the player
    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Human => "Player",
            Side::Opponent => "Computer",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    InPlay,
    /// A tally reached the win score; the result is announced once the delay runs out
    MatchOver { winner: Side, remaining_ms: f32 },
}

/// Things that happened during a tick, for sound and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// A point was awarded and the ball re-launched
    Scored { scorer: Side },
    /// A tally reached the win score
    MatchOver { winner: Side },
    /// The delay elapsed; announce the winner. Tallies are already reset.
    MatchDecided { winner: Side },
}

/// Fixed-size play field, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle; only `y` ever changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle vertically centered on its edge of the field
    pub fn new(side: Side, field: &PlayField, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Human => 0.0,
            Side::Opponent => field.width - tuning.paddle_width,
        };
        Self {
            side,
            x,
            y: field.height / 2.0 - tuning.paddle_height / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Strictly inside the vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Set `y`, clamped to the field
    pub fn set_y(&mut self, y: f32, field: &PlayField) {
        self.y = clamp_paddle_y(y, self.height, field);
    }
}

/// Clamp a paddle top edge to `[0, field.height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, field: &PlayField) -> f32 {
    y.clamp(0.0, (field.height - paddle_height).max(0.0))
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn speed(&self) -> f32 {
        speed_of(self.vel)
    }

    /// Re-center and launch at `min_speed`, at a random angle off horizontal
    /// toward a random side
    pub fn launch<R: Rng>(&mut self, field: &PlayField, tuning: &Tuning, rng: &mut R) {
        self.pos = field.center();
        let limit = tuning.max_launch_angle;
        let angle = rng.random_range(-limit..=limit);
        let direction = if rng.random::<bool>() { 1.0 } else { -1.0 };
        let vel = from_angle(angle, tuning.min_speed);
        self.vel = Vec2::new(vel.x * direction, vel.y);
    }

    /// Bring the speed up to `min_speed` if it fell below it
    pub fn apply_speed_floor(&mut self, min_speed: f32) {
        if self.speed() < min_speed {
            self.vel = with_speed(self.vel, min_speed);
        }
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub human: u32,
    pub opponent: u32,
}

impl MatchScore {
    pub fn tally(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: PlayField,
    pub human: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: MatchScore,
    pub phase: GamePhase,
    /// Where the opponent was aiming on the last tick
    pub opponent_target_y: f32,
    /// Ticks simulated so far
    pub frame: u64,
}

impl GameState {
    /// New match with centered paddles and a launched ball
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let field = PlayField {
            width: tuning.field_width,
            height: tuning.field_height,
        };
        let human = Paddle::new(Side::Human, &field, tuning);
        let opponent = Paddle::new(Side::Opponent, &field, tuning);
        let opponent_target_y = opponent.y;

        let mut ball = Ball::new(tuning.ball_radius);
        ball.launch(&field, tuning, rng);

        Self {
            field,
            human,
            opponent,
            ball,
            score: MatchScore::default(),
            phase: GamePhase::InPlay,
            opponent_target_y,
            frame: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_is_centered() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let state = GameState::new(&tuning, &mut rng);

        assert_eq!(state.human.y, 150.0);
        assert_eq!(state.opponent.y, 150.0);
        assert_eq!(state.human.x, 0.0);
        assert_eq!(state.opponent.x, 790.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.score, MatchScore::default());
        assert_eq!(state.phase, GamePhase::InPlay);
    }

    #[test]
    fn test_launch_speed_and_angle() {
        let tuning = Tuning::default();
        let field = PlayField {
            width: 800.0,
            height: 400.0,
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(5.0);
        let mut saw_left = false;
        let mut saw_right = false;

        for _ in 0..200 {
            ball.launch(&field, &tuning, &mut rng);
            assert_eq!(ball.pos, field.center());
            assert!((ball.speed() - tuning.min_speed).abs() < 1e-4);
            // |angle off horizontal| <= 45 degrees means |vy| <= |vx|
            assert!(ball.vel.y.abs() <= ball.vel.x.abs() + 1e-4);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_speed_floor() {
        let mut ball = Ball::new(5.0);
        ball.vel = Vec2::new(0.3, 0.4);
        ball.apply_speed_floor(5.0);
        assert!((ball.vel.x - 3.0).abs() < 1e-5);
        assert!((ball.vel.y - 4.0).abs() < 1e-5);

        // Faster balls are untouched
        ball.vel = Vec2::new(9.0, 0.0);
        ball.apply_speed_floor(5.0);
        assert_eq!(ball.vel, Vec2::new(9.0, 0.0));

        // A stopped ball still gets moving
        ball.vel = Vec2::ZERO;
        ball.apply_speed_floor(5.0);
        assert!((ball.speed() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_clamp() {
        let tuning = Tuning::default();
        let field = PlayField {
            width: 800.0,
            height: 400.0,
        };
        let mut paddle = Paddle::new(Side::Human, &field, &tuning);
        paddle.set_y(-40.0, &field);
        assert_eq!(paddle.y, 0.0);
        paddle.set_y(1000.0, &field);
        assert_eq!(paddle.y, 300.0);
        assert!(paddle.spans(350.0));
        assert!(!paddle.spans(300.0));
    }

    #[test]
    fn test_score_award_and_reset() {
        let mut score = MatchScore::default();
        score.award(Side::Opponent);
        score.award(Side::Opponent);
        score.award(Side::Human);
        assert_eq!(score.tally(Side::Opponent), 2);
        assert_eq!(score.tally(Side::Human), 1);
        score.reset();
        assert_eq!(score, MatchScore::default());
    }
}
