//! Frame scheduler
//!
//! Owns the game state and drives one update-then-render cycle per display
//! frame. Hosts feed it pointer positions and frame timestamps, then present
//! the returned [`Frame`]: draw the scene, show the score text, play the cues
//! and announce any decided match.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::client_to_field_y;
use crate::renderer::{Scene, build_scene};
use crate::sim::{GameEvent, GameState, Side, TickInput, tick};
use crate::tuning::Tuning;

/// Assumed frame time when there is no previous timestamp
pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;
/// Longest gap counted toward the match-over delay (tab switches etc.)
pub const MAX_FRAME_MS: f64 = 100.0;

/// Output of one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub events: Vec<GameEvent>,
    pub scene: Scene,
}

impl Frame {
    /// Winner to announce, if a match was decided this frame
    pub fn decided_winner(&self) -> Option<Side> {
        self.events.iter().find_map(|event| match event {
            GameEvent::MatchDecided { winner } => Some(*winner),
            _ => None,
        })
    }
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    tuning: Tuning,
    rng: Pcg32,
    input: TickInput,
    last_time: Option<f64>,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&tuning, &mut rng);
        log::info!(
            "New match on a {}x{} field (seed {})",
            tuning.field_width,
            tuning.field_height,
            seed
        );
        Self {
            state,
            tuning,
            rng,
            input: TickInput::default(),
            last_time: None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Pointer moved, in field coordinates. Takes effect on the next frame.
    pub fn pointer_moved(&mut self, field_y: f32) {
        self.input.pointer_y = Some(field_y);
    }

    /// Pointer moved, in client coordinates relative to the field's on-screen box
    pub fn pointer_moved_client(&mut self, client_y: f32, rect_top: f32, rect_height: f32) {
        let y = client_to_field_y(client_y, rect_top, rect_height, &self.state.field);
        self.pointer_moved(y);
    }

    /// Run one update and build the frame to present. `time_ms` is the host's
    /// frame timestamp.
    pub fn frame(&mut self, time_ms: f64) -> Frame {
        let dt_ms = match self.last_time {
            Some(last) => (time_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => DEFAULT_FRAME_MS,
        };
        self.last_time = Some(time_ms);

        let input = std::mem::take(&mut self.input);
        let events = tick(
            &mut self.state,
            &input,
            &self.tuning,
            &mut self.rng,
            dt_ms as f32,
        );

        Frame {
            events,
            scene: build_scene(&self.state),
        }
    }
}
