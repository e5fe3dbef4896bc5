//! Filter pipeline orchestration
//!
//! Wires user events to the filter store and runs the full pipeline as one
//! explicit, synchronous sequence: recompute current state → apply the
//! visibility matcher to every card → persist → re-render the resource
//! card. Every mutation runs the whole pipeline; there is no batching or
//! debounce.

use std::sync::Arc;

use alegre_common::filter::{matches, FacetKind, FilterState};
use alegre_common::resources::ResourceDeclaration;
use alegre_common::SceneEvent;
use tracing::{debug, info};

use crate::page::ScenePage;
use crate::render;
use crate::state::SharedState;
use crate::storage::{FilterStore, StorageBackend};

/// Owns the page surface, the filter store, and the static per-scene
/// resource declarations; runs the pipeline on every discrete UI event.
pub struct Orchestrator<P: ScenePage, S: StorageBackend> {
    page: P,
    store: FilterStore<S>,
    declarations: Vec<ResourceDeclaration>,
    shared: Arc<SharedState>,
}

impl<P: ScenePage, S: StorageBackend> Orchestrator<P, S> {
    pub fn new(page: P, store: FilterStore<S>, shared: Arc<SharedState>) -> Self {
        let declarations = ResourceDeclaration::for_scene(page.meta());
        Self {
            page,
            store,
            declarations,
            shared,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn store(&self) -> &FilterStore<S> {
        &self.store
    }

    /// Current state, derived on demand from the live widgets.
    pub fn current_state(&self) -> FilterState {
        self.store.current(&self.page)
    }

    /// Page-ready entry point: restore the persisted selection into the
    /// widgets, then settle the page with a first pipeline pass.
    pub fn init(&mut self) {
        info!(
            scene = %self.store.context().scene_id,
            "Initializing filter pipeline"
        );
        self.store.restore(&mut self.page);
        self.apply();
    }

    /// A facet chip was toggled.
    pub fn toggle_chip(&mut self, kind: FacetKind, value: &str) {
        self.store.toggle(&mut self.page, kind, value);
        self.apply();
    }

    /// The free-text query changed (runs on every keystroke).
    pub fn set_query(&mut self, text: &str) {
        self.page.set_query_text(text);
        self.apply();
    }

    /// One full pipeline pass: match → persist → aggregate, in that order,
    /// to completion, before the next event is processed.
    pub fn apply(&mut self) {
        let state = self.store.current(&self.page);

        let decisions: Vec<bool> = self
            .page
            .cards()
            .iter()
            .map(|card| matches(&card.facets, &state))
            .collect();
        let visible_cards = decisions.iter().filter(|v| **v).count();
        for (index, visible) in decisions.into_iter().enumerate() {
            self.page.set_card_visible(index, visible);
        }

        self.store.persist(&state);

        let shown = render::render(&mut self.page, &self.declarations, &state);

        debug!(visible_cards, shown, "Filter pipeline pass complete");
        self.shared.broadcast_event(SceneEvent::FilterChanged {
            state,
            visible_cards,
            timestamp: chrono::Utc::now(),
        });
        self.shared.broadcast_event(SceneEvent::ResourcesRendered {
            shown,
            timestamp: chrono::Utc::now(),
        });
    }
}
