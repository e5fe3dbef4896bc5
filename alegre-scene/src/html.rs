//! Static scene page parsing
//!
//! Builds a `StaticPage` from an already-rendered scene HTML document:
//! page-root `data-*` attributes, filter chips, and content cards with
//! their facet attributes and flattened text.

use alegre_common::filter::{CardFacets, FacetKind};
use alegre_common::PageMeta;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::page::{ScenePage, StaticPage};

/// Parse a scene document into an in-memory page surface.
pub fn parse_scene(html: &str) -> StaticPage {
    let document = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next());

    let meta = body.map(page_meta).unwrap_or_default();
    let mut page = StaticPage::new(meta);

    if let Ok(sel) = Selector::parse(".chip") {
        for chip in document.select(&sel) {
            add_chip(&mut page, chip);
        }
    }

    if let Ok(sel) = Selector::parse(".card") {
        for card in document.select(&sel) {
            page.add_card(card_facets(card));
        }
    }

    if let Some(query) = Selector::parse("#q")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .and_then(|el| el.value().attr("value"))
    {
        page.set_query_text(query);
    }

    debug!(
        scene = page.meta().scene_id.as_deref().unwrap_or("scene"),
        chips = page.chips().len(),
        cards = page.cards().len(),
        "Parsed scene page"
    );
    page
}

fn page_meta(body: ElementRef<'_>) -> PageMeta {
    let attr = |name: &str| PageMeta::clean(body.value().attr(name));
    PageMeta {
        scene_id: attr("id"),
        audio: attr("data-audio"),
        guion: attr("data-guion"),
        scores_url: attr("data-scores-url"),
        fondo: attr("data-fondo"),
        hero: attr("data-hero"),
    }
}

fn add_chip(page: &mut StaticPage, el: ElementRef<'_>) {
    let value = el.value();
    let (kind, facet_attr) = match value.attr("data-type") {
        Some("area") => (FacetKind::Area, "data-area"),
        Some("centro") => (FacetKind::Centro, "data-centro"),
        Some("log") => (FacetKind::Log, "data-log"),
        _ => return,
    };
    let Some(facet) = PageMeta::clean(value.attr(facet_attr)) else {
        return;
    };

    page.add_chip(kind, &facet);
    if value.classes().any(|c| c == "active") {
        page.set_chip_active(kind, &facet, true);
    }
}

fn card_facets(el: ElementRef<'_>) -> CardFacets {
    let value = el.value();
    let text = el.text().collect::<Vec<_>>().join(" ");
    CardFacets::new(
        value.attr("data-tags").unwrap_or_default(),
        value.attr("data-centros").unwrap_or_default(),
        value.attr("data-log").unwrap_or_default(),
        text.split_whitespace().collect::<Vec<_>>().join(" "),
    )
}
