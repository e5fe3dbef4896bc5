//! # Alegre Scene Engine (alegre-scene)
//!
//! Client-side enhancement engine for one scene page of the event site.
//!
//! **Purpose:** derive card visibility and the resource list from facet
//! chips and a free-text query, persist the selection per scene, and keep a
//! resilient multi-track audio player going through an ordered fallback
//! list.
//!
//! **Architecture:** pure state computation (`alegre-common`) behind thin
//! injected surfaces — `ScenePage` for the filter pipeline, `AudioSink` and
//! `AudioUi` for playback, `StorageBackend` for persistence — driven by an
//! explicit orchestrator rather than implicit listener chains.

pub mod audio;
pub mod docs;
pub mod error;
pub mod html;
pub mod orchestrator;
pub mod page;
pub mod probe;
pub mod render;
pub mod state;
pub mod storage;

pub use error::{Error, Result};
pub use orchestrator::Orchestrator;
pub use state::SharedState;
