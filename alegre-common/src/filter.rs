//! Filter state and the visibility matcher
//!
//! `FilterState` is the persisted record: three facet sets plus a free-text
//! query. `matches` is the pure predicate deciding card visibility from the
//! card's declared facets and the current state; it has no side effects and
//! no DOM dependency.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One filterable dimension, rendered as toggle chips on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Area,
    Centro,
    Log,
}

/// Active facet selections plus free-text query for one scene.
///
/// The serde layout matches the persisted record:
/// `{"areas":[...],"centros":[...],"logs":[...],"query":"..."}`. Missing
/// fields default, so a partially compatible record still loads; anything
/// structurally wrong fails parsing and the caller falls back to default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub areas: BTreeSet<String>,
    pub centros: BTreeSet<String>,
    pub logs: BTreeSet<String>,
    /// Trimmed text fragment; matching is case-insensitive.
    pub query: String,
}

impl FilterState {
    /// True when no facet is active and the query is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.centros.is_empty()
            && self.logs.is_empty()
            && self.query.is_empty()
    }

    /// The active-value set for one facet kind.
    pub fn facet(&self, kind: FacetKind) -> &BTreeSet<String> {
        match kind {
            FacetKind::Area => &self.areas,
            FacetKind::Centro => &self.centros,
            FacetKind::Log => &self.logs,
        }
    }

    /// Mutable access to the active-value set for one facet kind.
    pub fn facet_mut(&mut self, kind: FacetKind) -> &mut BTreeSet<String> {
        match kind {
            FacetKind::Area => &mut self.areas,
            FacetKind::Centro => &mut self.centros,
            FacetKind::Log => &mut self.logs,
        }
    }

    /// Serialize to the persisted JSON layout.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted record.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Declared facets of one content card, plus its flattened visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFacets {
    /// Area tags; a card declaring none gets the single tag `"general"`.
    pub tags: BTreeSet<String>,
    pub centros: BTreeSet<String>,
    pub logs: BTreeSet<String>,
    pub text: String,
}

impl CardFacets {
    /// Build from the space-separated attribute lists of a card.
    ///
    /// An empty tag list defaults to `{"general"}`, so an untagged card is
    /// filtered out whenever any area chip is active unless `"general"`
    /// itself is selected.
    pub fn new(tags: &str, centros: &str, logs: &str, text: impl Into<String>) -> Self {
        let mut tags = split_list(tags);
        if tags.is_empty() {
            tags.insert("general".to_string());
        }
        Self {
            tags,
            centros: split_list(centros),
            logs: split_list(logs),
            text: text.into(),
        }
    }
}

fn split_list(raw: &str) -> BTreeSet<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Pure visibility predicate: AND of the four match clauses.
///
/// Each facet clause is true when its selection set is empty or intersects
/// the card's declared set; the text clause is a case-folded substring check
/// on the card's flattened text.
pub fn matches(card: &CardFacets, state: &FilterState) -> bool {
    let area_ok = state.areas.is_empty() || !state.areas.is_disjoint(&card.tags);
    let centro_ok = state.centros.is_empty() || !state.centros.is_disjoint(&card.centros);
    let log_ok = state.logs.is_empty() || !state.logs.is_disjoint(&card.logs);
    let text_ok = state.query.is_empty()
        || card
            .text
            .to_lowercase()
            .contains(&state.query.to_lowercase());

    area_ok && centro_ok && log_ok && text_ok
}
