//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per display frame
//! - Randomness only through the caller's RNG
//! - No rendering, audio or platform dependencies; side effects leave as events

pub mod collision;
pub mod opponent;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{paddle_bounce, random_bounce};
pub use scoring::{Exit, match_winner, right_exit_awardee};
pub use state::{
    Ball, GameEvent, GamePhase, GameState, MatchScore, Paddle, PlayField, Side,
};
pub use tick::{TickInput, tick};
