//! Page-root metadata
//!
//! The attribute contract consumed from the host page: every field is an
//! optional `data-*` attribute on the page root, read as a trimmed string.

/// Page-level declarations for one scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Page identifier (`id` on the page root), e.g. `"scene6"`.
    pub scene_id: Option<String>,
    /// Comma-separated audio track filenames (`data-audio`).
    pub audio: Option<String>,
    /// Script/guide document filename (`data-guion`).
    pub guion: Option<String>,
    /// Score-folder URL (`data-scores-url`).
    pub scores_url: Option<String>,
    /// Projected-background image filename (`data-fondo`).
    pub fondo: Option<String>,
    /// Hero image filename (`data-hero`).
    pub hero: Option<String>,
}

impl PageMeta {
    /// Normalize a raw attribute value: trimmed, empty becomes absent.
    pub fn clean(raw: Option<&str>) -> Option<String> {
        raw.map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Declared audio tracks, split on commas with empties dropped.
    pub fn tracks(&self) -> Vec<String> {
        self.audio
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}
