//! Resource card rendering
//!
//! Materializes the derived resource list into the page: the container is
//! found-or-created exactly once and its content fully replaced on every
//! call, so rendering the same state twice yields identical content.

use alegre_common::filter::FilterState;
use alegre_common::resources::{visible_resources, ResourceDeclaration};
use tracing::debug;

use crate::page::{ResourceEntry, ScenePage};

/// Row shown when no declaration survives the current filter.
const EMPTY_PLACEHOLDER: &str = "No hay recursos para este filtro.";

/// Re-render the resource card for the given state. Returns the number of
/// resource links shown (the placeholder counts as zero).
pub fn render<P: ScenePage + ?Sized>(
    page: &mut P,
    declarations: &[ResourceDeclaration],
    state: &FilterState,
) -> usize {
    page.ensure_resource_card();

    let survivors = visible_resources(declarations, state);
    let shown = survivors.len();

    let entries = if survivors.is_empty() {
        vec![ResourceEntry::Placeholder(EMPTY_PLACEHOLDER.to_string())]
    } else {
        survivors
            .into_iter()
            .map(|d| ResourceEntry::Link {
                href: d.href.clone().unwrap_or_default(),
                label: format!("{} {}", d.kind.icon(), d.title),
                areas: d.areas.iter().cloned().collect(),
            })
            .collect()
    };

    page.replace_resource_list(entries);
    debug!(shown, "Rendered resource card");
    shown
}
