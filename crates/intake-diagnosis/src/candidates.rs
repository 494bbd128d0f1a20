use intake_catalog::Catalog;
use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::symptom::{Symptom, symptom_text};

/// Disorders in `categories` whose core symptoms are present, in category
/// then catalog order, without duplicates.
pub fn filter_candidates(
    catalog: &Catalog,
    categories: &[Category],
    symptoms: &[Symptom],
) -> Vec<String> {
    let text = symptom_text(symptoms);
    let mut candidates: Vec<String> = Vec::new();
    for category in categories {
        for disorder in catalog.disorders_in(*category) {
            if has_core_symptoms(disorder, &text) && !candidates.contains(&disorder.disorder_id) {
                candidates.push(disorder.disorder_id.clone());
            }
        }
    }
    candidates
}

/// Whether at least `threshold` core keywords occur in `symptom_text`.
/// Disorders without a core set always pass.
pub fn has_core_symptoms(disorder: &DisorderDefinition, symptom_text: &str) -> bool {
    let Some(core) = &disorder.core_symptoms else {
        return true;
    };
    let hits = core
        .any_of
        .iter()
        .filter(|k| symptom_text.contains(k.to_lowercase().as_str()))
        .count();
    hits >= core.threshold
}
