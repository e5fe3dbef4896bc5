//! Shared scene state
//!
//! Thread-safe shared state plus the event broadcast bus coupling the filter
//! pipeline and the audio controller to observers.

use alegre_common::events::{PlaybackState, SceneEvent};
use tokio::sync::{broadcast, RwLock};

/// Current audio track information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTrack {
    /// Index into the candidate track list
    pub index: usize,
    /// Cache-busted source URL currently loaded into the playback element
    pub source: String,
    /// Display name (filename without the audio extension)
    pub title: String,
}

/// Shared state accessible by all components
///
/// Uses RwLock for concurrent read access with rare writes.
pub struct SharedState {
    /// Mirror of the controller-owned playback state, for observers
    pub playback_state: RwLock<PlaybackState>,

    /// Currently loaded track (None before the first load)
    pub current_track: RwLock<Option<CurrentTrack>>,

    /// Event broadcaster
    pub event_tx: broadcast::Sender<SceneEvent>,
}

impl SharedState {
    /// Create new shared state with default values
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(100); // Buffer up to 100 events
        Self {
            playback_state: RwLock::new(PlaybackState::Paused),
            current_track: RwLock::new(None),
            event_tx,
        }
    }

    /// Broadcast an event to all listeners
    pub fn broadcast_event(&self, event: SceneEvent) {
        // Ignore send errors (no receivers is OK)
        let _ = self.event_tx.send(event);
    }

    /// Subscribe to the event stream
    pub fn subscribe_events(&self) -> broadcast::Receiver<SceneEvent> {
        self.event_tx.subscribe()
    }

    /// Get current playback state
    pub async fn get_playback_state(&self) -> PlaybackState {
        *self.playback_state.read().await
    }

    /// Set playback state
    pub async fn set_playback_state(&self, state: PlaybackState) {
        *self.playback_state.write().await = state;
    }

    /// Get current track information
    pub async fn get_current_track(&self) -> Option<CurrentTrack> {
        self.current_track.read().await.clone()
    }

    /// Set current track
    pub async fn set_current_track(&self, track: Option<CurrentTrack>) {
        *self.current_track.write().await = track;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
