//! Per-frame simulation tick
//!
//! One call is one display frame: velocities are in pixels per frame, and
//! only the match-over delay uses wall-clock time.

use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, opponent, scoring};
use crate::input::bind_pointer;
use crate::tuning::Tuning;

/// Input gathered since the last tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer height, in field coordinates
    pub pointer_y: Option<f32>,
}

/// Advance the game by one frame. `dt_ms` is the time since the previous frame.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
    dt_ms: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    if let Some(pointer_y) = input.pointer_y {
        bind_pointer(&mut state.human, pointer_y, &state.field);
    }

    if let GamePhase::MatchOver {
        winner,
        remaining_ms,
    } = state.phase
    {
        let remaining_ms = remaining_ms - dt_ms;
        if remaining_ms <= 0.0 {
            log::info!(
                "Game over! {} wins! (final {}-{})",
                winner.display_name(),
                state.score.human,
                state.score.opponent
            );
            state.score.reset();
            state.phase = GamePhase::InPlay;
            events.push(GameEvent::MatchDecided { winner });
        } else {
            state.phase = GamePhase::MatchOver {
                winner,
                remaining_ms,
            };
        }
        return events;
    }

    state.opponent_target_y =
        opponent::update_opponent(&mut state.opponent, state.ball.pos.y, &state.field, tuning);

    let ball = &mut state.ball;
    ball.apply_speed_floor(tuning.min_speed);
    ball.integrate();

    collision::resolve_walls(ball, &state.field, tuning, rng, &mut events);
    collision::resolve_paddles(
        ball,
        &state.field,
        &state.human,
        &state.opponent,
        tuning,
        rng,
        &mut events,
    );

    if let Some(exit) = scoring::check_exit(ball.pos.x, state.field.width) {
        let scorer = scoring::award_point(&mut state.score, exit, tuning);
        log::debug!(
            "{} scores ({:?} exit): {}-{}",
            scorer.display_name(),
            exit,
            state.score.human,
            state.score.opponent
        );
        events.push(GameEvent::Scored { scorer });
        ball.launch(&state.field, tuning, rng);

        if let Some(winner) = scoring::match_winner(&state.score, tuning.win_score) {
            log::info!("Match over, {} takes it", winner.display_name());
            state.phase = GamePhase::MatchOver {
                winner,
                remaining_ms: tuning.match_over_delay_ms,
            };
            events.push(GameEvent::MatchOver { winner });
        }
    }

    events
}
