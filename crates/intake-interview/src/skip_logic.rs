//! Applying a classified screening answer to the session state.

use intake_catalog::Catalog;
use intake_core::models::interview::InterviewState;
use intake_core::models::screening::{Classification, ScreeningItem};

/// What one screening answer changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenEffect {
    pub classification: Classification,
    /// Modules newly screened positive by this answer.
    pub positive_modules: Vec<String>,
    /// Items newly skipped by this answer.
    pub skipped: Vec<String>,
}

/// Record `classification` for `item`.
///
/// A positive answer screens every linked module positive. A negative answer
/// screens them negative and, when the item carries `skip_module_if_negative`,
/// skips every other unasked item linked to any of the same modules. An
/// ambiguous answer only records its 0.5 score.
pub fn apply_screening_response(
    catalog: &Catalog,
    state: &mut InterviewState,
    item: &ScreeningItem,
    classification: Classification,
) -> ScreenEffect {
    state
        .screening_scores
        .insert(item.id.clone(), classification.score());

    let mut effect = ScreenEffect {
        classification,
        positive_modules: Vec::new(),
        skipped: Vec::new(),
    };

    match classification {
        Classification::Positive => {
            for module in &item.linked_modules {
                if !state.positive_screens.contains(module) {
                    state.add_positive_screen(module);
                    effect.positive_modules.push(module.clone());
                }
            }
        }
        Classification::Negative => {
            for module in &item.linked_modules {
                state.add_negative_screen(module);
            }
            if item.skip_module_if_negative {
                let siblings = catalog
                    .screening_items()
                    .iter()
                    .filter(|other| other.id != item.id && other.links_any(&item.linked_modules));
                for other in siblings {
                    if state.mark_skipped(&other.id) {
                        effect.skipped.push(other.id.clone());
                    }
                }
            }
        }
        Classification::Ambiguous => {}
    }

    effect
}
