//! Point awards and match end
//!
//! The right goal is rigged: until the opponent has `forced_outcome_threshold`
//! points, a ball that gets past the opponent still scores for the opponent.
//! The human can only score once the opponent sits at the threshold, so the
//! opponent always reaches the win score first.

use super::state::{MatchScore, Side};
use crate::tuning::Tuning;

/// Edge the ball left the field through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Past the human paddle
    Left,
    /// Past the opponent paddle
    Right,
}

/// Whether the ball has left the field
pub fn check_exit(ball_x: f32, field_width: f32) -> Option<Exit> {
    if ball_x < 0.0 {
        Some(Exit::Left)
    } else if ball_x > field_width {
        Some(Exit::Right)
    } else {
        None
    }
}

/// Who gets the point when the ball leaves through the right edge
pub fn right_exit_awardee(opponent_tally: u32, threshold: u32) -> Side {
    if opponent_tally < threshold {
        Side::Opponent
    } else {
        Side::Human
    }
}

/// Who gets the point for an exit
pub fn awardee(exit: Exit, score: &MatchScore, tuning: &Tuning) -> Side {
    match exit {
        Exit::Left => Side::Opponent,
        Exit::Right => right_exit_awardee(score.opponent, tuning.forced_outcome_threshold),
    }
}

/// Award the point for an exit and return who got it
pub fn award_point(score: &mut MatchScore, exit: Exit, tuning: &Tuning) -> Side {
    let side = awardee(exit, score, tuning);
    score.award(side);
    side
}

/// Winner once either tally reaches the win score.
///
/// The opponent is reported as the winner whoever got there.
pub fn match_winner(score: &MatchScore, win_score: u32) -> Option<Side> {
    (score.human >= win_score || score.opponent >= win_score).then_some(Side::Opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_exit() {
        assert_eq!(check_exit(-0.1, 800.0), Some(Exit::Left));
        assert_eq!(check_exit(800.1, 800.0), Some(Exit::Right));
        assert_eq!(check_exit(0.0, 800.0), None);
        assert_eq!(check_exit(800.0, 800.0), None);
    }

    #[test]
    fn test_right_exit_awardee() {
        for tally in 0..9 {
            assert_eq!(right_exit_awardee(tally, 9), Side::Opponent);
        }
        assert_eq!(right_exit_awardee(9, 9), Side::Human);
    }

    #[test]
    fn test_left_exit_always_opponent() {
        let tuning = Tuning::default();
        let mut score = MatchScore {
            human: 3,
            opponent: 9,
        };
        assert_eq!(award_point(&mut score, Exit::Left, &tuning), Side::Opponent);
        assert_eq!(score.opponent, 10);
        assert_eq!(match_winner(&score, 10), Some(Side::Opponent));
    }

    #[test]
    fn test_right_exit_at_threshold_goes_to_human() {
        let tuning = Tuning::default();
        let mut score = MatchScore {
            human: 0,
            opponent: 9,
        };
        assert_eq!(award_point(&mut score, Exit::Right, &tuning), Side::Human);
        assert_eq!(score, MatchScore { human: 1, opponent: 9 });
        assert_eq!(match_winner(&score, 10), None);
    }

    #[test]
    fn test_right_exits_feed_opponent_first() {
        let tuning = Tuning::default();
        let mut score = MatchScore::default();
        for _ in 0..9 {
            award_point(&mut score, Exit::Right, &tuning);
            assert_eq!(score.human, 0);
        }
        assert_eq!(score.opponent, 9);
    }

    #[test]
    fn test_human_reaching_win_score_still_reports_opponent() {
        let score = MatchScore {
            human: 10,
            opponent: 9,
        };
        assert_eq!(match_winner(&score, 10), Some(Side::Opponent));
    }
}
