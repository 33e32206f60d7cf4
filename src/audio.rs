//! Sound cues
//!
//! The simulation reports what happened as [`GameEvent`]s; this module maps
//! them to one-shot cues. On the web the cues are synthesized with the Web
//! Audio API, so no sound files are needed and every play starts fresh.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// A point was scored
    Score,
    /// Match over
    GameOver,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallHit => Some(SoundEffect::WallHit),
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::MatchOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::MatchDecided { .. } => None,
        }
    }
}

/// Cues for a tick's events, in order
pub fn cues(events: &[GameEvent]) -> impl Iterator<Item = SoundEffect> + '_ {
    events.iter().filter_map(SoundEffect::for_event)
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Fails outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx),
                SoundEffect::WallHit => self.play_wall_hit(ctx),
                SoundEffect::Score => self.play_score(ctx),
                SoundEffect::GameOver => self.play_game_over(ctx),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Paddle hit - solid thump
        fn play_paddle_hit(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(self.volume * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Wall hit - higher ping
        fn play_wall_hit(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(self.volume * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }

        /// Point scored - two-note blip
        fn play_score(&self, ctx: &AudioContext) {
            for (i, freq) in [660.0, 440.0].iter().enumerate() {
                let delay = i as f64 * 0.09;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(self.volume * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Game over - sad descending
        fn play_game_over(&self, ctx: &AudioContext) {
            for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
                let delay = i as f64 * 0.2;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(self.volume * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }
}
