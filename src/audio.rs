//! Background music
//!
//! One looping track, started at a random offset each time play resumes.
//! The browser side is a thin wrapper over an `<audio>` element; the offset
//! logic is plain Rust so it can be checked natively.

/// Playback offset in seconds for a track of `duration` seconds given a
/// uniform roll in [0, 1).
///
/// Media elements report `NaN` (not loaded yet) or `+inf` (streams) as their
/// duration; there is no sensible offset then.
pub fn random_start_offset(duration: f64, roll: f64) -> Option<f64> {
    let offset = roll * duration;
    if offset.is_finite() && offset >= 0.0 {
        Some(offset)
    } else {
        log::error!("Unable to pick a playback offset (duration {})", duration);
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BackgroundMusic;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use web_sys::HtmlAudioElement;

    use super::random_start_offset;
    use crate::Settings;

    /// The game's background track
    pub struct BackgroundMusic {
        element: HtmlAudioElement,
        settings: Settings,
    }

    impl BackgroundMusic {
        pub fn new(src: &str, settings: &Settings) -> Result<Self, JsValue> {
            let element = HtmlAudioElement::new_with_src(src)?;
            element.set_loop(true);
            let music = Self {
                element,
                settings: settings.clone(),
            };
            music.apply_volume();
            Ok(music)
        }

        fn apply_volume(&self) {
            self.element
                .set_volume(f64::from(self.settings.effective_volume()));
        }

        /// Start playing from a random point in the track
        pub fn play_random_part(&self) {
            let roll = js_sys::Math::random();
            let Some(offset) = random_start_offset(self.element.duration(), roll) else {
                return;
            };
            self.element.set_current_time(offset);
            if let Err(e) = self.element.play() {
                log::warn!("Audio play failed: {:?}", e);
            }
        }

        pub fn pause(&self) {
            if let Err(e) = self.element.pause() {
                log::warn!("Audio pause failed: {:?}", e);
            }
        }

        /// Flip mute; returns the new state
        pub fn toggle_muted(&mut self) -> bool {
            self.settings.muted = !self.settings.muted;
            self.apply_volume();
            let muted = self.settings.muted;
            log::info!("Sound {}", if muted { "muted" } else { "unmuted" });
            muted
        }
    }
}
