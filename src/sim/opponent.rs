//! Scripted opponent paddle
//!
//! Aims the paddle center at the ball's height. The step toward the target is
//! `diff * ease_out_cubic(responsiveness)`: the curve is applied to the
//! constant, not to a progress fraction, so it is the same multiplier every
//! frame. At the default responsiveness (60) that multiplier is huge and the
//! paddle slams to whichever bound lies past the target; at 1.0 it lands on
//! the target exactly.

use super::state::{Paddle, PlayField, clamp_paddle_y};
use crate::ease_out_cubic;
use crate::tuning::Tuning;

/// Paddle top edge that centers the paddle on `ball_y`, clamped to the field
pub fn aim_target(ball_y: f32, paddle_height: f32, field: &PlayField) -> f32 {
    clamp_paddle_y(ball_y - paddle_height / 2.0, paddle_height, field)
}

/// Move the opponent paddle toward the ball. Returns the target it aimed at.
pub fn update_opponent(paddle: &mut Paddle, ball_y: f32, field: &PlayField, tuning: &Tuning) -> f32 {
    let target = aim_target(ball_y, paddle.height, field);
    let diff = target - paddle.y;
    let eased = ease_out_cubic(tuning.opponent_responsiveness);
    paddle.set_y(paddle.y + diff * eased, field);
    target
}
