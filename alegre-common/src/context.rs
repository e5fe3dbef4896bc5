//! Scene context resolution
//!
//! A scene is one page of the event site with its own identifier, audio
//! tracks, documents, and persisted filter state. The context is derived once
//! at startup from the page identifier and is immutable for the lifetime of
//! the page.

/// Fixed prefix for persisted filter records.
const STORAGE_PREFIX: &str = "alegremente_filters";

/// Schema version suffix. Bump this when the persisted record layout changes
/// so that old, incompatible records are silently ignored instead of
/// misinterpreted.
const STORAGE_SCHEMA: &str = "v1";

/// Resolved scene identity plus the namespaced persistence key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneContext {
    /// Lower-cased scene identifier, e.g. `"scene6"`.
    pub scene_id: String,
    /// Storage key namespaced by prefix, scene, and schema version, so that
    /// persisted state never collides across scenes or schema versions.
    pub storage_key: String,
}

impl SceneContext {
    /// Resolve the context from the page-level identifier.
    ///
    /// Trims and lower-cases the identifier; a missing or empty identifier
    /// falls back to the generic `"scene"`. Always succeeds.
    pub fn resolve(page_id: Option<&str>) -> Self {
        let scene_id = page_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| "scene".to_string());

        let storage_key = format!("{STORAGE_PREFIX}_{scene_id}_{STORAGE_SCHEMA}");

        Self {
            scene_id,
            storage_key,
        }
    }

    /// Default script-document filename for this scene, used when the page
    /// does not declare one.
    pub fn default_guion(&self) -> &'static str {
        match self.scene_id.as_str() {
            "scene1" => "Guión Escena I.pdf",
            "scene2" => "Guión Escena II.pdf",
            "scene3" => "Guión Escena III.pdf",
            "scene4" => "Guión Escena IV.pdf",
            "scene5" => "Guión Escena V.pdf",
            "scene6" => "Guión Escena VI.pdf",
            "scene7" => "Guión Escena VII.pdf",
            "scene8" => "Guión Escena VIII.pdf",
            _ => "Guion.pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_and_lowercases_page_id() {
        let ctx = SceneContext::resolve(Some("  Scene6  "));
        assert_eq!(ctx.scene_id, "scene6");
        assert_eq!(ctx.storage_key, "alegremente_filters_scene6_v1");
    }

    #[test]
    fn missing_or_empty_id_falls_back_to_generic() {
        assert_eq!(SceneContext::resolve(None).scene_id, "scene");
        assert_eq!(SceneContext::resolve(Some("   ")).scene_id, "scene");
        assert_eq!(
            SceneContext::resolve(None).storage_key,
            "alegremente_filters_scene_v1"
        );
    }

    #[test]
    fn storage_keys_differ_across_scenes() {
        let a = SceneContext::resolve(Some("scene1"));
        let b = SceneContext::resolve(Some("scene2"));
        assert_ne!(a.storage_key, b.storage_key);
    }

    #[test]
    fn default_guion_per_scene() {
        assert_eq!(
            SceneContext::resolve(Some("scene6")).default_guion(),
            "Guión Escena VI.pdf"
        );
        assert_eq!(
            SceneContext::resolve(Some("intro")).default_guion(),
            "Guion.pdf"
        );
    }
}
