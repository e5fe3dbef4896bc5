//! Page surface abstraction
//!
//! `ScenePage` is the injected DOM/UI surface the engine drives: chip and
//! query widgets, content cards, and the derived resource card. The engine
//! computes state; the page surface is the thin rendering adapter that makes
//! it visible. `StaticPage` is the in-memory implementation used by hosts
//! and tests.

use alegre_common::filter::{CardFacets, FacetKind};
use alegre_common::PageMeta;

/// One toggle chip widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub kind: FacetKind,
    pub value: String,
    pub active: bool,
}

/// One content card: declared facets plus derived visibility.
///
/// Visibility is recomputed on every filter change and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub facets: CardFacets,
    pub visible: bool,
}

impl Card {
    pub fn new(facets: CardFacets) -> Self {
        // Cards start visible; the first pipeline pass settles them.
        Self {
            facets,
            visible: true,
        }
    }
}

/// One rendered row of the resource card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEntry {
    /// A resource link: kind icon + title, target, and its area labels.
    Link {
        href: String,
        label: String,
        areas: Vec<String>,
    },
    /// Explicit "nothing matches" row; never mixed with links.
    Placeholder(String),
}

/// The injected page surface.
///
/// Implementations own the widgets; the engine only reads their state and
/// pushes derived results back.
pub trait ScenePage {
    /// Page-root attribute declarations.
    fn meta(&self) -> &PageMeta;

    /// All filter chips in page order.
    fn chips(&self) -> &[Chip];

    /// Set one chip's active state. Chips are identified by kind + value;
    /// duplicates with the same identity change together.
    fn set_chip_active(&mut self, kind: FacetKind, value: &str, active: bool);

    /// Flip one chip's active state and return the new value.
    fn toggle_chip(&mut self, kind: FacetKind, value: &str) -> bool;

    /// Current free-text query widget content.
    fn query_text(&self) -> &str;

    fn set_query_text(&mut self, text: &str);

    /// All content cards in page order.
    fn cards(&self) -> &[Card];

    /// Show or hide one card.
    fn set_card_visible(&mut self, index: usize, visible: bool);

    /// Materialize the resource card container. Found-or-created exactly
    /// once; calling again is a no-op.
    fn ensure_resource_card(&mut self);

    /// Replace (never append) the resource card's content.
    fn replace_resource_list(&mut self, entries: Vec<ResourceEntry>);

    /// Rendered resource rows, `None` before the container exists.
    fn resource_list(&self) -> Option<&[ResourceEntry]>;
}

/// In-memory page surface.
#[derive(Debug, Default)]
pub struct StaticPage {
    meta: PageMeta,
    chips: Vec<Chip>,
    cards: Vec<Card>,
    query: String,
    resource_card: Option<Vec<ResourceEntry>>,
    resource_card_creations: usize,
}

impl StaticPage {
    pub fn new(meta: PageMeta) -> Self {
        Self {
            meta,
            ..Default::default()
        }
    }

    /// Add an inactive chip widget.
    pub fn add_chip(&mut self, kind: FacetKind, value: &str) {
        self.chips.push(Chip {
            kind,
            value: value.to_string(),
            active: false,
        });
    }

    /// Add a content card.
    pub fn add_card(&mut self, facets: CardFacets) {
        self.cards.push(Card::new(facets));
    }

    /// How many times the resource container was actually created.
    /// Exactly one creation per page lifetime is the contract.
    pub fn resource_card_creations(&self) -> usize {
        self.resource_card_creations
    }
}

impl ScenePage for StaticPage {
    fn meta(&self) -> &PageMeta {
        &self.meta
    }

    fn chips(&self) -> &[Chip] {
        &self.chips
    }

    fn set_chip_active(&mut self, kind: FacetKind, value: &str, active: bool) {
        for chip in &mut self.chips {
            if chip.kind == kind && chip.value == value {
                chip.active = active;
            }
        }
    }

    fn toggle_chip(&mut self, kind: FacetKind, value: &str) -> bool {
        let mut now_active = false;
        for chip in &mut self.chips {
            if chip.kind == kind && chip.value == value {
                chip.active = !chip.active;
                now_active = chip.active;
            }
        }
        now_active
    }

    fn query_text(&self) -> &str {
        &self.query
    }

    fn set_query_text(&mut self, text: &str) {
        self.query = text.to_string();
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn set_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.visible = visible;
        }
    }

    fn ensure_resource_card(&mut self) {
        if self.resource_card.is_none() {
            self.resource_card = Some(Vec::new());
            self.resource_card_creations += 1;
        }
    }

    fn replace_resource_list(&mut self, entries: Vec<ResourceEntry>) {
        self.resource_card = Some(entries);
    }

    fn resource_list(&self) -> Option<&[ResourceEntry]> {
        self.resource_card.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut page = StaticPage::new(PageMeta::default());
        page.add_chip(FacetKind::Area, "musica");

        assert!(page.toggle_chip(FacetKind::Area, "musica"));
        assert!(page.chips()[0].active);
        assert!(!page.toggle_chip(FacetKind::Area, "musica"));
    }

    #[test]
    fn duplicate_chips_share_identity() {
        let mut page = StaticPage::new(PageMeta::default());
        page.add_chip(FacetKind::Log, "semana1");
        page.add_chip(FacetKind::Log, "semana1");

        page.set_chip_active(FacetKind::Log, "semana1", true);
        assert!(page.chips().iter().all(|c| c.active));
    }

    #[test]
    fn resource_card_created_exactly_once() {
        let mut page = StaticPage::new(PageMeta::default());
        assert!(page.resource_list().is_none());

        page.ensure_resource_card();
        page.ensure_resource_card();
        assert_eq!(page.resource_card_creations(), 1);
        assert_eq!(page.resource_list().map(<[_]>::len), Some(0));
    }

    #[test]
    fn replace_never_appends() {
        let mut page = StaticPage::new(PageMeta::default());
        page.ensure_resource_card();
        page.replace_resource_list(vec![ResourceEntry::Placeholder("vacío".to_string())]);
        page.replace_resource_list(vec![ResourceEntry::Placeholder("vacío".to_string())]);
        assert_eq!(page.resource_list().map(<[_]>::len), Some(1));
    }
}
