//! Audio fallback controller
//!
//! Owns one playback element and the ordered candidate list, advancing
//! forward through candidates on media failure. The candidate index never
//! moves backward and a failed candidate is never retried, which bounds the
//! number of load attempts to the candidate count and guarantees
//! termination.

use std::sync::Arc;

use alegre_common::events::{PlaybackState, SceneEvent};
use tracing::{debug, error, info, warn};

use crate::audio::sink::AudioSink;
use crate::audio::tracks::TrackList;
use crate::audio::AudioUi;
use crate::state::{CurrentTrack, SharedState};

/// Controller lifecycle state. The candidate index is tracked separately;
/// together they form `Loading(i)`, `Playing(i)`, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, nothing loaded yet
    Idle,
    /// Source set, load outcome not yet observed
    Loading,
    /// Current candidate reported ready
    Ready,
    Playing,
    Paused,
    /// Every candidate failed; terminal for the session
    Exhausted,
}

/// Resilient playback controller over an injected sink and player widget.
pub struct AudioController<S: AudioSink, U: AudioUi> {
    tracks: TrackList,
    sink: S,
    ui: U,
    shared: Arc<SharedState>,
    state: ControllerState,
    index: usize,
    /// Set once playback has started at least once this session.
    started: bool,
    /// Armed until the first page gesture is observed.
    unlock_armed: bool,
}

impl<S: AudioSink, U: AudioUi> AudioController<S, U> {
    pub fn new(tracks: TrackList, sink: S, ui: U, shared: Arc<SharedState>) -> Self {
        Self {
            tracks,
            sink,
            ui,
            shared,
            state: ControllerState::Idle,
            index: 0,
            started: false,
            unlock_armed: true,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Load the first candidate. Playback is not attempted yet; that
    /// happens on the page-ready hook.
    pub async fn start(&mut self) {
        info!(candidates = self.tracks.len(), "Starting audio controller");
        self.load_current().await;
    }

    /// Page ready: attempt autoplay of the loaded candidate.
    pub async fn on_page_ready(&mut self) {
        self.try_play().await;
    }

    /// Point the sink at the candidate at the current index.
    async fn load_current(&mut self) {
        let Some(url) = self.tracks.busted_url(self.index) else {
            return;
        };
        let title = self
            .tracks
            .display_name(self.index)
            .unwrap_or_default();

        self.sink.set_source(&url);
        self.state = ControllerState::Loading;
        self.ui.set_track_label(&title);

        self.shared
            .set_current_track(Some(CurrentTrack {
                index: self.index,
                source: url,
                title: title.clone(),
            }))
            .await;
        self.shared.broadcast_event(SceneEvent::TrackChanged {
            index: self.index,
            track: title,
            timestamp: chrono::Utc::now(),
        });
    }

    /// The current candidate finished loading (media-ready hook).
    pub fn on_ready(&mut self) {
        if self.state == ControllerState::Loading {
            self.state = ControllerState::Ready;
        }
    }

    /// Attempt playback; a rejection is not an error. The controller stays
    /// on the current candidate, signals that a gesture is needed, and
    /// leaves the rest of the page alone.
    pub async fn try_play(&mut self) {
        if self.state == ControllerState::Exhausted {
            return;
        }
        match self.sink.play().await {
            Ok(()) => self.mark_playing().await,
            Err(e) => {
                warn!("Playback attempt rejected: {e}");
                self.state = ControllerState::Paused;
                self.ui.show_unlock_hint();
                self.shared
                    .set_playback_state(PlaybackState::Paused)
                    .await;
                self.shared.broadcast_event(SceneEvent::AutoplayBlocked {
                    timestamp: chrono::Utc::now(),
                });
            }
        }
        self.sync_button();
    }

    /// First pointer/key/touch interaction on the page. Fires at most once:
    /// the arming flag clears on the first call regardless of outcome, and
    /// the attempt only happens if playback never started.
    pub async fn on_first_gesture(&mut self) {
        if !self.unlock_armed {
            return;
        }
        self.unlock_armed = false;
        if self.started || self.state == ControllerState::Exhausted {
            return;
        }
        debug!("Gesture unlock: attempting playback");
        if self.sink.play().await.is_ok() {
            self.mark_playing().await;
        }
        self.sync_button();
    }

    /// User-facing play/pause toggle. Failures are swallowed; the control's
    /// label is resynchronized to the actual sink state afterward.
    pub async fn toggle(&mut self) {
        if self.state == ControllerState::Exhausted {
            return;
        }
        if self.sink.is_paused() {
            if self.sink.play().await.is_ok() {
                self.mark_playing().await;
            }
        } else {
            self.sink.pause();
            self.mark_paused().await;
        }
        self.sync_button();
    }

    /// Media error on the current source: advance to the next candidate if
    /// one remains, otherwise give up for the session.
    pub async fn on_media_error(&mut self) {
        if self.state == ControllerState::Exhausted {
            return;
        }
        if self.index + 1 < self.tracks.len() {
            self.index += 1;
            info!(index = self.index, "Audio candidate failed, advancing");
            self.load_current().await;
            self.try_play().await;
        } else {
            error!("No audio candidate could be loaded; giving up for this session");
            self.state = ControllerState::Exhausted;
            self.shared.broadcast_event(SceneEvent::TracksExhausted {
                attempts: self.tracks.len(),
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Tab visibility change. Going to background pauses current playback;
    /// position is kept and resuming is user-initiated only.
    pub async fn on_visibility_change(&mut self, hidden: bool) {
        if hidden && !self.sink.is_paused() {
            debug!("Page hidden, pausing playback");
            self.sink.pause();
            self.mark_paused().await;
        }
    }

    /// Global play/pause shortcut, suppressed while a text widget has focus.
    pub async fn on_space_key(&mut self, in_text_widget: bool) {
        if in_text_widget {
            return;
        }
        self.toggle().await;
    }

    async fn mark_playing(&mut self) {
        self.started = true;
        self.state = ControllerState::Playing;
        self.shared.set_playback_state(PlaybackState::Playing).await;
        self.shared
            .broadcast_event(SceneEvent::PlaybackStateChanged {
                state: PlaybackState::Playing,
                timestamp: chrono::Utc::now(),
            });
        info!(index = self.index, "Playback started");
    }

    async fn mark_paused(&mut self) {
        self.state = ControllerState::Paused;
        self.shared.set_playback_state(PlaybackState::Paused).await;
        self.shared
            .broadcast_event(SceneEvent::PlaybackStateChanged {
                state: PlaybackState::Paused,
                timestamp: chrono::Utc::now(),
            });
        info!(index = self.index, "Playback paused");
    }

    fn sync_button(&mut self) {
        let playing = !self.sink.is_paused();
        self.ui.set_button_playing(playing);
    }
}
