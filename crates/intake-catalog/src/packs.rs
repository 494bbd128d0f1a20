//! Built-in category packs, one file per diagnostic category.

pub mod anxiety;
pub mod mood;
pub mod obsessive_compulsive;
pub mod psychotic;
pub mod substance;
pub mod trauma;

use intake_core::models::category::Category;
use intake_core::models::disorder::{CoreSymptoms, Criterion, DisorderDefinition};
use intake_core::models::module::{Module, Question};
use intake_core::models::screening::ScreeningItem;

fn item(
    id: &str,
    text: &str,
    category: Category,
    linked_modules: &[&str],
    skip_module_if_negative: bool,
) -> ScreeningItem {
    ScreeningItem {
        id: id.to_string(),
        text: text.to_string(),
        category,
        linked_modules: linked_modules.iter().map(|m| m.to_string()).collect(),
        skip_module_if_negative,
    }
}

/// Question ids are `{module_id}_{n:02}`, numbered from 1.
fn module(
    id: &str,
    name: &str,
    category: Category,
    priority_weight: f64,
    questions: &[&str],
) -> Module {
    Module {
        id: id.to_string(),
        name: name.to_string(),
        category,
        priority_weight,
        questions: questions
            .iter()
            .enumerate()
            .map(|(i, text)| Question::new(format!("{id}_{:02}", i + 1), *text))
            .collect(),
    }
}

/// Criterion ids are `{disorder_id}.{criterion}`.
fn disorder(
    id: &str,
    name: &str,
    category: Category,
    criteria: &[(&str, &str)],
    minimum_criteria_count: Option<usize>,
    core_symptoms: Option<CoreSymptoms>,
) -> DisorderDefinition {
    DisorderDefinition {
        disorder_id: id.to_string(),
        disorder_name: name.to_string(),
        category,
        criteria: criteria
            .iter()
            .map(|(cid, text)| Criterion::new(format!("{id}.{cid}"), *text))
            .collect(),
        minimum_criteria_count,
        core_symptoms,
    }
}

/// At least `threshold` of `any_of` must appear in the symptom names.
fn core(any_of: &[&str], threshold: usize) -> Option<CoreSymptoms> {
    Some(CoreSymptoms {
        any_of: any_of.iter().map(|k| k.to_string()).collect(),
        threshold,
    })
}
