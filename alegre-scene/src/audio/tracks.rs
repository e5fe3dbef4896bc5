//! Ordered candidate track list

use alegre_common::resources::encode_path;
use alegre_common::PageMeta;

/// Built-in single-track fallback used when the scene declares no tracks.
const FALLBACK_TRACK: &str = "Tierra Imaginaria.mp3";

/// Ordered, non-empty sequence of candidate audio files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackList {
    tracks: Vec<String>,
}

impl TrackList {
    /// Build from an explicit list; an empty list falls back to the built-in
    /// default so the list is never empty.
    pub fn new(tracks: Vec<String>) -> Self {
        if tracks.is_empty() {
            Self {
                tracks: vec![FALLBACK_TRACK.to_string()],
            }
        } else {
            Self { tracks }
        }
    }

    /// Build from the scene's `data-audio` declaration.
    pub fn from_meta(meta: &PageMeta) -> Self {
        Self::new(meta.tracks())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; the fallback guarantees at least one candidate.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Declared filename of one candidate.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    /// Source URL for a candidate with a time-derived cache-busting query
    /// parameter, so repeated loads are never served from a stale cache.
    pub fn busted_url(&self, index: usize) -> Option<String> {
        self.name(index).map(|name| {
            format!(
                "{}?v={}",
                encode_path(name),
                chrono::Utc::now().timestamp_millis()
            )
        })
    }

    /// Display name: filename without the audio extension.
    pub fn display_name(&self, index: usize) -> Option<String> {
        self.name(index).map(strip_audio_extension)
    }
}

fn strip_audio_extension(name: &str) -> String {
    for ext in [".mp3", ".wav", ".m4a"] {
        if name.len() > ext.len() && name.to_lowercase().ends_with(ext) {
            return name[..name.len() - ext.len()].to_string();
        }
    }
    name.to_string()
}
