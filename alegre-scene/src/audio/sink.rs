//! Playback element seam

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a playback attempt or of the loaded media itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The environment rejected the playback attempt (autoplay policy).
    /// Not a media failure: the current candidate stays loaded.
    #[error("playback attempt rejected by autoplay policy")]
    AutoplayBlocked,

    /// The current source could not be loaded or decoded.
    #[error("media error: {0}")]
    Media(String),
}

/// The playback element owned by the audio controller.
///
/// Stands in for the page's audio element: one source at a time, async play
/// attempts that the environment may reject, synchronous pause.
#[async_trait]
pub trait AudioSink: Send {
    /// Point the element at a new source URL. Implicitly pauses.
    fn set_source(&mut self, url: &str);

    /// Attempt to start playback of the current source.
    async fn play(&mut self) -> Result<(), SinkError>;

    /// Pause playback. Position is kept; never fails.
    fn pause(&mut self);

    /// Whether the element is currently paused.
    fn is_paused(&self) -> bool;
}
