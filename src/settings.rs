//! Game settings
//!
//! Read once at startup from an inline JSON object (the canvas
//! `data-settings` attribute on the web, the first argument natively).
//! Nothing is written back.

use serde::{Deserialize, Serialize};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with background music muted
    pub muted: bool,
    /// Music volume (0.0 - 1.0)
    pub volume: f32,
    /// Log filter level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Start with the autopilot playing
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            volume: 0.8,
            log_level: "info".to_string(),
            seed: None,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.volume = settings.volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Parse optional settings, falling back to defaults on bad input.
    ///
    /// The parse error is handed back rather than logged: the log level
    /// itself comes from these settings, so the logger is not up yet.
    pub fn load(json: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => (settings, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }

    /// `log_level` as a `log` filter (unknown names mean Info)
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Effective playback volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}
