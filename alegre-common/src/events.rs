//! Event types for the scene event system

use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

/// Playback state of the scene audio player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// Scene event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Filter pipeline ran: state recomputed, cards shown/hidden
    FilterChanged {
        state: FilterState,
        visible_cards: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Resource card re-rendered
    ResourcesRendered {
        shown: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Playback state changed
    PlaybackStateChanged {
        state: PlaybackState,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Audio source advanced to a new candidate track
    TrackChanged {
        index: usize,
        track: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Autoplay attempt rejected by policy; a user gesture is required
    AutoplayBlocked {
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Every candidate track failed to load; playback given up for the session
    TracksExhausted {
        attempts: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}
