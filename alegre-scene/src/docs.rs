//! Scene document wiring
//!
//! Resolves the script/guide document and the score-folder link from the
//! page attributes: view/download hrefs, the embedded-viewer URL gated on an
//! existence probe, and a disabled scores link when no folder URL is
//! declared.

use alegre_common::resources::encode_path;
use alegre_common::{PageMeta, SceneContext};
use tracing::debug;

use crate::probe;

/// Viewer fragment keeping the toolbar and fitting the page width.
const VIEWER_FRAGMENT: &str = "#toolbar=1&navpanes=0&statusbar=0&view=FitH";

/// Score-folder link state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoresLink {
    Enabled(String),
    /// No folder declared: rendered disabled with a pending label.
    Pending,
}

impl ScoresLink {
    pub fn label(&self) -> &'static str {
        match self {
            ScoresLink::Enabled(_) => "📂 Carpeta de partituras",
            ScoresLink::Pending => "📂 Carpeta de partituras (pendiente)",
        }
    }
}

/// Resolved document links for one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLinks {
    /// Encoded href for the "view" link.
    pub view_href: String,
    /// Encoded href for the "download" link (same target).
    pub download_href: String,
    /// Embedded-viewer URL; `None` when the document failed the existence
    /// probe, in which case the viewer stays hidden.
    pub frame_src: Option<String>,
    pub scores: ScoresLink,
}

/// Declared or default script-document filename for the scene.
pub fn resolve_guion(meta: &PageMeta, context: &SceneContext) -> String {
    meta.guion
        .clone()
        .unwrap_or_else(|| context.default_guion().to_string())
}

/// Embedded-viewer URL for an encoded document href.
pub fn frame_src(encoded_href: &str) -> String {
    format!("{encoded_href}{VIEWER_FRAGMENT}")
}

/// Wire the document links for a scene, probing the script document so the
/// viewer is only enabled for a fetchable file.
///
/// `base` is the page URL; the document filename is relative to it, so the
/// probe resolves against the base the way the page's own links do.
pub async fn wire(
    meta: &PageMeta,
    context: &SceneContext,
    client: &reqwest::Client,
    base: &reqwest::Url,
) -> DocLinks {
    let guion = resolve_guion(meta, context);
    let encoded = encode_path(&guion);
    debug!(scene = %context.scene_id, guion = %guion, "Wiring scene documents");

    let frame = match base.join(&encoded) {
        Ok(probe_url) => {
            if probe::head_ok(client, probe_url.as_str()).await {
                Some(frame_src(&encoded))
            } else {
                None
            }
        }
        Err(e) => {
            debug!(guion = %encoded, "Document URL did not resolve: {e}");
            None
        }
    };

    let scores = match &meta.scores_url {
        Some(url) => ScoresLink::Enabled(url.clone()),
        None => ScoresLink::Pending,
    };

    DocLinks {
        view_href: encoded.clone(),
        download_href: encoded,
        frame_src: frame,
        scores,
    }
}
