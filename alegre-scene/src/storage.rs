//! Persistence backend and the filter state store
//!
//! `StorageBackend` is the seam standing in for browser local storage: a
//! string key-value store with last-write-wins semantics and exactly one
//! writer per scene. `FilterStore` owns loading, persisting, and deriving the
//! filter state for one scene.

use std::collections::HashMap;

use alegre_common::filter::{FacetKind, FilterState};
use alegre_common::SceneContext;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::page::ScenePage;

/// Key-value persistence seam (local storage analog).
pub trait StorageBackend: Send {
    /// Read the value for a key, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Failures (quota, unavailable backend) are reported but
    /// callers are expected to swallow them without blocking the pipeline.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A backend that rejects every write, for exercising the swallow path.
#[derive(Debug, Default)]
pub struct RejectingStorage;

impl StorageBackend for RejectingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("write rejected".to_string()))
    }
}

/// Filter state store for one scene.
///
/// Owns the persistence of `FilterState` under the scene's namespaced key.
/// The "current" state is never cached: it is re-derived from the live
/// widget states on every call, so it cannot drift from what is visibly
/// selected.
pub struct FilterStore<S: StorageBackend> {
    context: SceneContext,
    backend: S,
}

impl<S: StorageBackend> FilterStore<S> {
    pub fn new(context: SceneContext, backend: S) -> Self {
        Self { context, backend }
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    /// Load the persisted state for this scene.
    ///
    /// Missing, corrupt, or incompatible records yield the empty default
    /// state; this path never fails the page.
    pub fn load(&self) -> FilterState {
        match self.backend.get(&self.context.storage_key) {
            None => FilterState::default(),
            Some(raw) => match FilterState::from_json(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!(
                        key = %self.context.storage_key,
                        "Discarding unreadable filter record: {e}"
                    );
                    FilterState::default()
                }
            },
        }
    }

    /// Persist a state snapshot under the scene's key.
    ///
    /// Write failures are logged and swallowed; the rest of the pipeline
    /// must not be blocked by storage problems.
    pub fn persist(&mut self, state: &FilterState) {
        let json = match state.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize filter state: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.context.storage_key, &json) {
            warn!(key = %self.context.storage_key, "Filter state not persisted: {e}");
        }
    }

    /// Derive the current state from the live widget states.
    pub fn current<P: ScenePage + ?Sized>(&self, page: &P) -> FilterState {
        let mut state = FilterState::default();
        for chip in page.chips() {
            if chip.active {
                state.facet_mut(chip.kind).insert(chip.value.clone());
            }
        }
        state.query = page.query_text().trim().to_string();
        state
    }

    /// Flip one chip's membership on the page. The caller re-runs
    /// `current` and persists afterward.
    pub fn toggle<P: ScenePage + ?Sized>(&self, page: &mut P, kind: FacetKind, value: &str) {
        page.toggle_chip(kind, value);
    }

    /// Restore a previously persisted state into the page widgets.
    pub fn restore<P: ScenePage + ?Sized>(&self, page: &mut P) {
        let saved = self.load();
        if saved.is_empty() {
            return;
        }
        debug!(key = %self.context.storage_key, "Restoring persisted filter state");

        let selections: Vec<(FacetKind, String)> = page
            .chips()
            .iter()
            .filter(|chip| saved.facet(chip.kind).contains(&chip.value))
            .map(|chip| (chip.kind, chip.value.clone()))
            .collect();
        for (kind, value) in selections {
            page.set_chip_active(kind, &value, true);
        }
        page.set_query_text(&saved.query);
    }
}
