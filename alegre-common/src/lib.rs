//! # Alegre Common Library
//!
//! Shared code for the scene enhancement engine:
//! - Scene context and storage key derivation
//! - Page metadata model (the page-root `data-*` attribute contract)
//! - Filter state, card facets, and the pure visibility matcher
//! - Resource declarations and the pure aggregation step
//! - Event types (SceneEvent enum)

pub mod context;
pub mod error;
pub mod events;
pub mod filter;
pub mod meta;
pub mod resources;

pub use context::SceneContext;
pub use error::{Error, Result};
pub use events::{PlaybackState, SceneEvent};
pub use filter::{matches, CardFacets, FacetKind, FilterState};
pub use meta::PageMeta;
pub use resources::{visible_resources, ResourceDeclaration, ResourceKind};
