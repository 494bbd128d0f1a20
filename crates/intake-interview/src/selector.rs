//! Which screening items to ask next.

use intake_catalog::Catalog;
use intake_core::models::interview::InterviewState;
use intake_core::models::screening::ScreeningItem;

use crate::config::InterviewConfig;

/// The first `items_per_seed_category` items of each seed category, in seed
/// order, without duplicates.
pub fn seed_items(catalog: &Catalog, config: &InterviewConfig) -> Vec<String> {
    let mut seeds: Vec<String> = Vec::new();
    for category in &config.seed_categories {
        for item in catalog.items_in(*category).take(config.items_per_seed_category) {
            if !seeds.contains(&item.id) {
                seeds.push(item.id.clone());
            }
        }
    }
    seeds
}

/// Distinct modules linked from `items`, in first-seen order.
pub fn linked_modules(catalog: &Catalog, items: &[String]) -> Vec<String> {
    let mut modules: Vec<String> = Vec::new();
    for item in items.iter().filter_map(|id| catalog.screening_item(id)) {
        for module in &item.linked_modules {
            if !modules.contains(module) {
                modules.push(module.clone());
            }
        }
    }
    modules
}

/// Seed items not yet asked or skipped, capped at `pending_cap`.
pub fn priority_items<'a>(
    catalog: &'a Catalog,
    config: &InterviewConfig,
    state: &InterviewState,
) -> Vec<&'a ScreeningItem> {
    state
        .priority_items
        .iter()
        .filter_map(|id| catalog.screening_item(id))
        .filter(|item| is_open(state, item))
        .take(config.pending_cap)
        .collect()
}

/// Everything still to screen: the open seed items first, then (with
/// `screen_full_catalog`) the remaining catalog items in catalog order.
/// Capped at `pending_cap`.
pub fn pending_items<'a>(
    catalog: &'a Catalog,
    config: &InterviewConfig,
    state: &InterviewState,
) -> Vec<&'a ScreeningItem> {
    let mut pending = priority_items(catalog, config, state);
    if config.screen_full_catalog {
        let rest = catalog
            .screening_items()
            .iter()
            .filter(|item| !state.priority_items.contains(&item.id))
            .filter(|item| is_open(state, item));
        pending.extend(rest);
    }
    pending.truncate(config.pending_cap);
    pending
}

fn is_open(state: &InterviewState, item: &ScreeningItem) -> bool {
    !state.is_asked(&item.id) && !state.is_skipped(&item.id)
}
