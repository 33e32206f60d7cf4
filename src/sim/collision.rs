//! Collision detection and response
//!
//! Walls reflect the ball vertically. Paddles send it back at an angle that
//! depends on where it struck, a little faster each time. Either may add a
//! random bounce on top.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, GameEvent, Paddle, PlayField, Side};
use crate::tuning::Tuning;
use crate::{from_angle, speed_of};

/// Keep the speed, redraw the angle within `±max_angle` of horizontal, keep
/// the horizontal direction
pub fn random_bounce<R: Rng>(vel: Vec2, max_angle: f32, rng: &mut R) -> Vec2 {
    let speed = speed_of(vel);
    let angle = rng.random_range(-max_angle..=max_angle);
    let bounced = from_angle(angle, speed);
    Vec2::new(bounced.x * sign(vel.x), bounced.y)
}

/// Zero stays zero
#[inline]
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn maybe_random_bounce<R: Rng>(ball: &mut Ball, tuning: &Tuning, rng: &mut R) {
    if rng.random_bool(tuning.random_bounce_chance) {
        ball.vel = random_bounce(ball.vel, tuning.max_random_angle, rng);
    }
}

/// Reflect off the top and bottom walls. Returns true on a hit.
pub fn resolve_walls<R: Rng>(
    ball: &mut Ball,
    field: &PlayField,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> bool {
    let top = ball.radius;
    let bottom = field.height - ball.radius;
    if ball.pos.y >= top && ball.pos.y <= bottom {
        return false;
    }

    ball.vel.y = -ball.vel.y;
    ball.pos.y = if ball.pos.y < top { top } else { bottom };
    events.push(GameEvent::WallHit);

    maybe_random_bounce(ball, tuning, rng);
    true
}

/// Which paddle the ball is striking this frame, if any.
///
/// The ball's leading edge must be past the paddle face and its center
/// strictly within the paddle's vertical span.
pub fn paddle_contact(ball: &Ball, field: &PlayField, human: &Paddle, opponent: &Paddle) -> Option<Side> {
    if ball.pos.x < field.width / 2.0 {
        let crossed = ball.pos.x - ball.radius < human.x + human.width;
        (crossed && human.spans(ball.pos.y)).then_some(Side::Human)
    } else {
        let crossed = ball.pos.x + ball.radius > opponent.x;
        (crossed && opponent.spans(ball.pos.y)).then_some(Side::Opponent)
    }
}

/// Outgoing velocity for a ball striking `paddle` at height `ball_y`.
///
/// Center hits go straight back; edge hits leave at `max_bounce_angle`.
/// Speed grows by `speed_increase` up to `max_speed`, and the ball always
/// heads away from the paddle.
pub fn paddle_bounce(ball_y: f32, speed: f32, paddle: &Paddle, tuning: &Tuning) -> Vec2 {
    let relative = (paddle.center_y() - ball_y) / paddle.half_height();
    let bounce_angle = relative * tuning.max_bounce_angle;
    let speed = (speed + tuning.speed_increase).min(tuning.max_speed);

    let vx = (speed * bounce_angle.cos()).abs();
    let vy = -speed * bounce_angle.sin();
    match paddle.side {
        Side::Human => Vec2::new(vx, vy),
        Side::Opponent => Vec2::new(-vx, vy),
    }
}

/// Bounce off whichever paddle the ball is striking. Returns the side hit.
pub fn resolve_paddles<R: Rng>(
    ball: &mut Ball,
    field: &PlayField,
    human: &Paddle,
    opponent: &Paddle,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    let side = paddle_contact(ball, field, human, opponent)?;
    let paddle = match side {
        Side::Human => human,
        Side::Opponent => opponent,
    };

    ball.vel = paddle_bounce(ball.pos.y, ball.speed(), paddle, tuning);

    // Flush against the face so the ball can't tunnel into the paddle
    ball.pos.x = match side {
        Side::Human => paddle.x + paddle.width + ball.radius,
        Side::Opponent => paddle.x - ball.radius,
    };
    events.push(GameEvent::PaddleHit { side });

    maybe_random_bounce(ball, tuning, rng);
    Some(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> PlayField {
        PlayField {
            width: 800.0,
            height: 400.0,
        }
    }

    fn no_random_bounce() -> Tuning {
        Tuning {
            random_bounce_chance: 0.0,
            ..Default::default()
        }
    }

    fn paddles(tuning: &Tuning) -> (Paddle, Paddle) {
        let field = field();
        (
            Paddle::new(Side::Human, &field, tuning),
            Paddle::new(Side::Opponent, &field, tuning),
        )
    }

    #[test]
    fn test_wall_hit_reflects_and_clamps() {
        let tuning = no_random_bounce();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(300.0, 2.0);
        ball.vel = Vec2::new(4.0, -3.0);

        assert!(resolve_walls(&mut ball, &field(), &tuning, &mut rng, &mut events));
        assert_eq!(ball.pos.y, 5.0);
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0));
        assert_eq!(events, vec![GameEvent::WallHit]);

        ball.pos.y = 398.0;
        assert!(resolve_walls(&mut ball, &field(), &tuning, &mut rng, &mut events));
        assert_eq!(ball.pos.y, 395.0);
        assert_eq!(ball.vel.y, -3.0);
    }

    #[test]
    fn test_no_wall_hit_in_open_field() {
        let tuning = no_random_bounce();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(300.0, 200.0);
        ball.vel = Vec2::new(4.0, -3.0);

        assert!(!resolve_walls(&mut ball, &field(), &tuning, &mut rng, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_random_bounce_keeps_speed_and_direction() {
        let mut rng = Pcg32::seed_from_u64(3);
        let max = std::f32::consts::FRAC_PI_4;
        for _ in 0..100 {
            let vel = random_bounce(Vec2::new(-6.0, 2.0), max, &mut rng);
            assert!((vel.length() - Vec2::new(-6.0, 2.0).length()).abs() < 1e-4);
            assert!(vel.x < 0.0);
            assert!(vel.y.abs() <= vel.x.abs() + 1e-4);
        }
    }

    #[test]
    fn test_center_hit_goes_straight_back() {
        let tuning = no_random_bounce();
        let (human, _) = paddles(&tuning);
        let vel = paddle_bounce(human.center_y(), 7.0, &human, &tuning);
        assert!(vel.y.abs() < 1e-5);
        assert!((vel.x - 7.2).abs() < 1e-5);
    }

    #[test]
    fn test_edge_hit_deflects_45_degrees() {
        let tuning = no_random_bounce();
        let (_, opponent) = paddles(&tuning);
        // Top edge of the paddle: relative intersect = 1
        let vel = paddle_bounce(opponent.y, 10.0, &opponent, &tuning);
        assert!(vel.x < 0.0);
        assert!(vel.y < 0.0);
        assert!((vel.x.abs() - vel.y.abs()).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_speed_capped() {
        let tuning = no_random_bounce();
        let (human, _) = paddles(&tuning);
        let vel = paddle_bounce(human.center_y(), 14.9, &human, &tuning);
        assert!((vel.length() - 15.0).abs() < 1e-4);
        let vel = paddle_bounce(human.center_y(), 15.0, &human, &tuning);
        assert!((vel.length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_human_paddle_hit_repositions_ball() {
        let tuning = no_random_bounce();
        let (human, opponent) = paddles(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(12.0, human.center_y());
        ball.vel = Vec2::new(-5.0, 0.0);

        let side = resolve_paddles(&mut ball, &field(), &human, &opponent, &tuning, &mut rng, &mut events);
        assert_eq!(side, Some(Side::Human));
        assert_eq!(ball.pos.x, 15.0);
        assert!(ball.vel.x > 0.0);
        assert!((ball.speed() - 5.2).abs() < 1e-4);
        assert_eq!(events, vec![GameEvent::PaddleHit { side: Side::Human }]);
    }

    #[test]
    fn test_opponent_paddle_hit_sends_ball_left() {
        let tuning = no_random_bounce();
        let (human, opponent) = paddles(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(788.0, opponent.y + 10.0);
        ball.vel = Vec2::new(5.0, 1.0);

        let side = resolve_paddles(&mut ball, &field(), &human, &opponent, &tuning, &mut rng, &mut events);
        assert_eq!(side, Some(Side::Opponent));
        assert_eq!(ball.pos.x, 785.0);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_miss_above_paddle() {
        let tuning = no_random_bounce();
        let (human, opponent) = paddles(&tuning);
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(12.0, human.y - 1.0);
        assert_eq!(paddle_contact(&ball, &field(), &human, &opponent), None);
        // The paddle's own edges don't count
        ball.pos.y = human.y;
        assert_eq!(paddle_contact(&ball, &field(), &human, &opponent), None);
    }

    #[test]
    fn test_always_random_bounce_preserves_speed() {
        let tuning = Tuning {
            random_bounce_chance: 1.0,
            ..Default::default()
        };
        let (human, opponent) = paddles(&tuning);
        let mut rng = Pcg32::seed_from_u64(9);
        let mut events = Vec::new();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(12.0, human.center_y());
        ball.vel = Vec2::new(-5.0, 0.0);

        resolve_paddles(&mut ball, &field(), &human, &opponent, &tuning, &mut rng, &mut events);
        assert!((ball.speed() - 5.2).abs() < 1e-4);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_wall_random_bounce_keeps_speed_and_heading() {
        let tuning = Tuning {
            random_bounce_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(21);
        for vx in [-4.0f32, 4.0] {
            let mut events = Vec::new();
            let mut ball = Ball::new(5.0);
            ball.pos = Vec2::new(300.0, 397.0);
            ball.vel = Vec2::new(vx, 3.0);

            assert!(resolve_walls(&mut ball, &field(), &tuning, &mut rng, &mut events));
            assert_eq!(ball.pos.y, 395.0);
            assert!((ball.speed() - 5.0).abs() < 1e-4);
            assert_eq!(ball.vel.x.signum(), vx.signum());
            assert_eq!(events, vec![GameEvent::WallHit]);
        }
    }
}
