//! Player preferences
//!
//! Not persisted; on the web they come from the page query string
//! (`?mute=1&volume=0.5&seed=42`).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start muted
    pub muted: bool,
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a URL query string, with or without the leading `?`.
    ///
    /// Keys and values are form-urlencoded. Unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let trimmed = value.trim();
            let bad = || ConfigError::BadQueryValue {
                key: key.to_string(),
                value: value.to_string(),
            };
            match key.as_ref() {
                "volume" => settings.master_volume = parse_volume(trimmed).ok_or_else(bad)?,
                "sfx" => settings.sfx_volume = parse_volume(trimmed).ok_or_else(bad)?,
                "mute" => settings.muted = parse_flag(trimmed).ok_or_else(bad)?,
                "seed" => settings.seed = Some(trimmed.parse().map_err(|_| bad())?),
                _ => log::debug!("Ignoring unknown setting `{}`", key),
            }
        }

        Ok(settings)
    }

    /// Effective cue volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

fn parse_volume(value: &str) -> Option<f32> {
    let vol: f32 = value.parse().ok()?;
    (0.0..=1.0).contains(&vol).then_some(vol)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "" | "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}
