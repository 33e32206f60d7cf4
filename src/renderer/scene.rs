//! Frame description
//!
//! Maps the game state straight onto drawing primitives. No logic beyond the
//! mapping; the GPU side never looks at the game state.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::state::{GameState, MatchScore, Paddle, Side};

/// Net dash geometry
pub const NET_WIDTH: f32 = 2.0;
pub const NET_DASH: f32 = 20.0;
pub const NET_SPACING: f32 = 40.0;

/// A drawing primitive in field coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole field
    Clear { color: [f32; 4] },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Everything needed to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
    /// Text for the score display
    pub score_text: String,
}

/// `"Player: <n> | Computer: <n>"`
pub fn score_text(score: &MatchScore) -> String {
    format!(
        "{}: {} | {}: {}",
        Side::Human.display_name(),
        score.human,
        Side::Opponent.display_name(),
        score.opponent
    )
}

fn paddle_rect(paddle: &Paddle) -> DrawCommand {
    let color = match paddle.side {
        Side::Human => colors::HUMAN_PADDLE,
        Side::Opponent => colors::OPPONENT_PADDLE,
    };
    DrawCommand::FillRect {
        x: paddle.x,
        y: paddle.y,
        width: paddle.width,
        height: paddle.height,
        color,
    }
}

/// Build the scene for the current state
pub fn build_scene(state: &GameState) -> Scene {
    let field = state.field;
    let mut commands = vec![
        DrawCommand::Clear {
            color: colors::BACKGROUND,
        },
        paddle_rect(&state.human),
        paddle_rect(&state.opponent),
        DrawCommand::FillCircle {
            center: state.ball.pos,
            radius: state.ball.radius,
            color: colors::BALL,
        },
    ];

    let mut y = 0.0;
    while y < field.height {
        commands.push(DrawCommand::FillRect {
            x: field.width / 2.0 - NET_WIDTH / 2.0,
            y,
            width: NET_WIDTH,
            height: NET_DASH,
            color: colors::NET,
        });
        y += NET_SPACING;
    }

    Scene {
        width: field.width,
        height: field.height,
        commands,
        score_text: score_text(&state.score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_score_text() {
        let score = MatchScore {
            human: 1,
            opponent: 9,
        };
        assert_eq!(score_text(&score), "Player: 1 | Computer: 9");
    }

    #[test]
    fn test_scene_layout() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let state = GameState::new(&tuning, &mut rng);
        let scene = build_scene(&state);

        assert!(matches!(scene.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(
            scene.commands[1],
            DrawCommand::FillRect {
                x: 0.0,
                y: 150.0,
                width: 10.0,
                height: 100.0,
                color: colors::HUMAN_PADDLE,
            }
        );
        assert!(matches!(
            scene.commands[2],
            DrawCommand::FillRect { x, color, .. } if x == 790.0 && color == colors::OPPONENT_PADDLE
        ));
        assert!(matches!(
            scene.commands[3],
            DrawCommand::FillCircle { radius, .. } if radius == 5.0
        ));

        // 400px tall field: dashes at 0, 40, ..., 360
        let dashes = scene.commands.len() - 4;
        assert_eq!(dashes, 10);
        assert_eq!(scene.score_text, "Player: 0 | Computer: 0");
    }
}
