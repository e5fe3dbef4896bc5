//! Scene resource declarations and the derived resource list
//!
//! Declarations are static per scene, built once from the page-root
//! attributes. Aggregation against the current filter state is a pure
//! function; materializing the result into the page is the renderer's job.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::filter::FilterState;
use crate::meta::PageMeta;

/// Placeholder href meaning "not wired yet".
const PLACEHOLDER_HREF: &str = "#";

/// Kind of linkable asset, used to pick the list icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Pdf,
    Audio,
    Sheet,
    Doc,
    Link,
}

impl ResourceKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "📄",
            ResourceKind::Audio => "🎵",
            ResourceKind::Sheet => "📊",
            ResourceKind::Doc => "📝",
            ResourceKind::Link => "🔗",
        }
    }
}

/// Static description of one linkable asset eligible for the resource list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDeclaration {
    pub title: String,
    /// `None` when the scene declares no usable target; such a declaration
    /// is permanently excluded from rendering.
    pub href: Option<String>,
    /// Areas this resource belongs to, matched against the active area set.
    pub areas: BTreeSet<String>,
    pub kind: ResourceKind,
}

impl ResourceDeclaration {
    /// Build the per-scene declaration list from the page-root attributes:
    /// script document, score folder, projected background. Each is optional.
    pub fn for_scene(meta: &PageMeta) -> Vec<ResourceDeclaration> {
        vec![
            ResourceDeclaration {
                title: "Guion (PDF)".to_string(),
                href: file_href(meta.guion.as_deref()),
                areas: area_set(&["teatro", "produccion"]),
                kind: ResourceKind::Pdf,
            },
            ResourceDeclaration {
                title: "Carpeta de partituras".to_string(),
                href: raw_href(meta.scores_url.as_deref()),
                areas: area_set(&["musica"]),
                kind: ResourceKind::Link,
            },
            ResourceDeclaration {
                title: "Fondo proyectado (JPG)".to_string(),
                href: file_href(meta.fondo.as_deref()),
                areas: area_set(&["plastica", "luces"]),
                kind: ResourceKind::Link,
            },
        ]
    }
}

/// Derive the renderable declarations for the current state.
///
/// Drops declarations without a usable href, then applies the area filter:
/// with no active areas every surviving declaration is shown, otherwise only
/// those whose area set intersects the selection.
pub fn visible_resources<'a>(
    declarations: &'a [ResourceDeclaration],
    state: &FilterState,
) -> Vec<&'a ResourceDeclaration> {
    declarations
        .iter()
        .filter(|d| d.href.is_some())
        .filter(|d| state.areas.is_empty() || !state.areas.is_disjoint(&d.areas))
        .collect()
}

/// Percent-encode a relative path the way `encodeURI` does for filenames:
/// each `/`-separated segment is encoded, separators are kept.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<Cow<'_, str>>>()
        .join("/")
}

fn area_set(areas: &[&str]) -> BTreeSet<String> {
    areas.iter().map(|a| a.to_string()).collect()
}

/// Href from a declared filename: trimmed, percent-encoded, placeholder and
/// empty values excluded.
fn file_href(raw: Option<&str>) -> Option<String> {
    clean_href(raw).map(|name| encode_path(&name))
}

/// Href used verbatim (already a URL).
fn raw_href(raw: Option<&str>) -> Option<String> {
    clean_href(raw)
}

fn clean_href(raw: Option<&str>) -> Option<String> {
    PageMeta::clean(raw).filter(|v| v != PLACEHOLDER_HREF)
}
