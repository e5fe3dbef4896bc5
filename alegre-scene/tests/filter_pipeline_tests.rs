//! Filter pipeline integration tests
//!
//! Full pipeline runs over an in-memory page: chip toggles and query
//! keystrokes drive match → persist → aggregate, with state persisted per
//! scene and the resource card kept in step.

mod helpers;

use std::sync::Arc;

use alegre_common::filter::{CardFacets, FacetKind, FilterState};
use alegre_common::{PageMeta, SceneContext, SceneEvent};
use alegre_scene::page::{ResourceEntry, ScenePage, StaticPage};
use alegre_scene::storage::{FilterStore, MemoryStorage, StorageBackend};
use alegre_scene::{Orchestrator, SharedState};
use helpers::init_tracing;

fn scene6_page() -> StaticPage {
    let meta = PageMeta {
        scene_id: Some("scene6".to_string()),
        guion: Some("Guión Escena VI.pdf".to_string()),
        scores_url: Some("https://drive.example/partituras".to_string()),
        fondo: Some("Fondo 6.jpg".to_string()),
        ..Default::default()
    };
    let mut page = StaticPage::new(meta);
    page.add_chip(FacetKind::Area, "musica");
    page.add_chip(FacetKind::Area, "teatro");
    page.add_chip(FacetKind::Area, "general");
    page.add_card(CardFacets::new("teatro", "", "", "Bloqueo de escena"));
    page.add_card(CardFacets::new("musica", "", "", "Coro y afinación"));
    page.add_card(CardFacets::new("", "", "", "Notas generales de luz"));
    page
}

fn orchestrator_for(
    page: StaticPage,
) -> (Orchestrator<StaticPage, MemoryStorage>, Arc<SharedState>) {
    init_tracing();
    let scene = page.meta().scene_id.clone();
    let store = FilterStore::new(
        SceneContext::resolve(scene.as_deref()),
        MemoryStorage::new(),
    );
    let shared = Arc::new(SharedState::new());
    (
        Orchestrator::new(page, store, Arc::clone(&shared)),
        shared,
    )
}

/// Given three cards tagged teatro, musica, and (default) general, when the
/// "musica" chip is activated, exactly the musica card stays visible and the
/// resource list narrows to declarations intersecting {"musica"}.
#[test]
fn musica_chip_narrows_cards_and_resources() {
    let (mut orch, _shared) = orchestrator_for(scene6_page());
    orch.init();

    // No filter: everything visible, all three resources listed.
    assert_eq!(orch.page().cards().iter().filter(|c| c.visible).count(), 3);
    assert_eq!(orch.page().resource_list().map(<[_]>::len), Some(3));

    orch.toggle_chip(FacetKind::Area, "musica");

    let visible: Vec<bool> = orch.page().cards().iter().map(|c| c.visible).collect();
    assert_eq!(visible, vec![false, true, false]);

    let list = orch.page().resource_list().unwrap();
    assert_eq!(list.len(), 1);
    match &list[0] {
        ResourceEntry::Link { label, .. } => {
            assert!(label.contains("Carpeta de partituras"));
        }
        other => panic!("expected the scores link, got {other:?}"),
    }

    // Deactivating the chip restores everything.
    orch.toggle_chip(FacetKind::Area, "musica");
    assert_eq!(orch.page().cards().iter().filter(|c| c.visible).count(), 3);
}

/// A text query with no facets active filters by flattened card text,
/// case-insensitively.
#[test]
fn text_query_filters_by_card_text() {
    let (mut orch, _shared) = orchestrator_for(scene6_page());
    orch.init();

    orch.set_query("LUZ");

    let visible: Vec<bool> = orch.page().cards().iter().map(|c| c.visible).collect();
    assert_eq!(visible, vec![false, false, true]);
    // Text queries do not narrow the resource list (only areas do).
    assert_eq!(orch.page().resource_list().map(<[_]>::len), Some(3));
}

/// Every keystroke persists: the stored record always reflects the latest
/// pipeline pass, with no debounce.
#[test]
fn every_mutation_persists_immediately() {
    let (mut orch, _shared) = orchestrator_for(scene6_page());
    orch.init();

    orch.set_query("l");
    assert_eq!(orch.store().load().query, "l");
    orch.set_query("lu");
    assert_eq!(orch.store().load().query, "lu");

    orch.toggle_chip(FacetKind::Area, "teatro");
    let persisted = orch.store().load();
    assert!(persisted.areas.contains("teatro"));
    assert_eq!(persisted.query, "lu");
}

/// Init restores a previously persisted selection into the widgets before
/// the first pass, so the page reopens as the user left it.
#[test]
fn init_restores_persisted_selection() {
    init_tracing();
    let context = SceneContext::resolve(Some("scene6"));
    let mut backend = MemoryStorage::new();
    let mut saved = FilterState::default();
    saved.areas.insert("musica".to_string());
    saved.query = "coro".to_string();
    backend
        .set(&context.storage_key, &saved.to_json().unwrap())
        .unwrap();

    let store = FilterStore::new(context, backend);
    let shared = Arc::new(SharedState::new());
    let mut orch = Orchestrator::new(scene6_page(), store, shared);
    orch.init();

    assert_eq!(orch.current_state(), saved);
    let visible: Vec<bool> = orch.page().cards().iter().map(|c| c.visible).collect();
    // "musica" area + "coro" text leaves only the musica card.
    assert_eq!(visible, vec![false, true, false]);
}

/// A record persisted by another scene is never loaded: storage keys are
/// namespaced per scene.
#[test]
fn persisted_state_is_scene_scoped() {
    init_tracing();
    let mut backend = MemoryStorage::new();
    let other = SceneContext::resolve(Some("scene1"));
    let mut foreign = FilterState::default();
    foreign.areas.insert("teatro".to_string());
    backend
        .set(&other.storage_key, &foreign.to_json().unwrap())
        .unwrap();

    let store = FilterStore::new(SceneContext::resolve(Some("scene6")), backend);
    let shared = Arc::new(SharedState::new());
    let mut orch = Orchestrator::new(scene6_page(), store, shared);
    orch.init();

    assert!(orch.current_state().is_empty());
    assert_eq!(orch.page().cards().iter().filter(|c| c.visible).count(), 3);
}

/// Each pipeline pass broadcasts FilterChanged then ResourcesRendered, in
/// order, within the same synchronous handler.
#[test]
fn pipeline_broadcasts_in_order() {
    let (mut orch, shared) = orchestrator_for(scene6_page());
    let mut events = shared.subscribe_events();
    orch.init();
    orch.toggle_chip(FacetKind::Area, "musica");

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen.len(), 4); // two passes, two events each

    assert!(matches!(
        &seen[2],
        SceneEvent::FilterChanged { state, visible_cards: 1, .. }
            if state.areas.contains("musica")
    ));
    assert!(matches!(&seen[3], SceneEvent::ResourcesRendered { shown: 1, .. }));
}

/// The resource card container is materialized exactly once across many
/// passes, and rendering is idempotent.
#[test]
fn resource_card_is_single_and_stable() {
    let (mut orch, _shared) = orchestrator_for(scene6_page());
    orch.init();
    orch.apply();
    orch.apply();

    assert_eq!(orch.page().resource_card_creations(), 1);
    assert_eq!(orch.page().resource_list().map(<[_]>::len), Some(3));
}

/// A filter matching no resources renders the explicit placeholder row.
#[test]
fn unmatched_filter_renders_placeholder() {
    let (mut orch, _shared) = orchestrator_for(scene6_page());
    orch.init();
    orch.toggle_chip(FacetKind::Area, "general");

    let list = orch.page().resource_list().unwrap();
    assert_eq!(list.len(), 1);
    assert!(matches!(
        &list[0],
        ResourceEntry::Placeholder(text) if text == "No hay recursos para este filtro."
    ));
}
