//! Resilient multi-track audio playback
//!
//! One playback element, an ordered list of candidate tracks, and a
//! forward-only fallback policy: a candidate that fails to load is never
//! retried, so at most N load attempts happen for N candidates.

pub mod controller;
pub mod sink;
pub mod tracks;

pub use controller::{AudioController, ControllerState};
pub use sink::{AudioSink, SinkError};
pub use tracks::TrackList;

/// Player-widget surface: the play/pause button, the track label, and the
/// subtle unlock hint shown when autoplay is blocked.
pub trait AudioUi {
    /// Resynchronize the control's label to the actual playback state.
    fn set_button_playing(&mut self, playing: bool);

    /// Visually signal that a user gesture is required to start playback.
    fn show_unlock_hint(&mut self);

    /// Update the displayed track name.
    fn set_track_label(&mut self, name: &str);
}

/// In-memory player widget for hosts and tests.
#[derive(Debug, Default)]
pub struct AudioPanel {
    pub button_playing: bool,
    pub unlock_hint: bool,
    pub track_label: String,
}

impl AudioPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioUi for AudioPanel {
    fn set_button_playing(&mut self, playing: bool) {
        self.button_playing = playing;
    }

    fn show_unlock_hint(&mut self) {
        self.unlock_hint = true;
    }

    fn set_track_label(&mut self, name: &str) {
        self.track_label = format!("🎶 Audio: {name}");
    }
}
