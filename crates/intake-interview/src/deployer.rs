//! Deep-dive module planning and question serving.

use intake_catalog::Catalog;
use intake_core::models::interview::InterviewState;
use intake_core::models::module::Question;
use intake_core::models::step::ModuleProgress;

/// Modules to deploy: the distinct positively screened modules ordered by
/// descending priority weight, keeping discovery order among equal weights,
/// truncated to `cap`. Modules missing from the catalog sort last.
pub fn plan_deployment(catalog: &Catalog, state: &InterviewState, cap: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = Vec::new();
    for module_id in &state.positive_screens {
        if ranked.iter().any(|(id, _)| *id == module_id.as_str()) {
            continue;
        }
        let weight = catalog
            .module(module_id)
            .map(|m| m.priority_weight)
            .unwrap_or(f64::NEG_INFINITY);
        ranked.push((module_id.as_str(), weight));
    }
    // Stable, so equal weights keep discovery order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(cap)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// The next undeployed module in deployment order.
pub fn next_module(state: &InterviewState) -> Option<String> {
    state
        .priority_modules
        .iter()
        .find(|m| !state.is_deployed(m))
        .cloned()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeployStep<'a> {
    Question {
        question: &'a Question,
        progress: ModuleProgress,
    },
    /// The module has no questions left; it is now marked deployed.
    ModuleComplete,
}

/// Serve the next question of `module_id`, advancing its index, or mark the
/// module deployed when its questions are exhausted. A module absent from
/// the catalog has no questions.
pub fn next_question<'a>(
    catalog: &'a Catalog,
    state: &mut InterviewState,
    module_id: &str,
) -> DeployStep<'a> {
    let questions = catalog
        .module(module_id)
        .map(|m| m.questions.as_slice())
        .unwrap_or(&[]);
    let index = state.module_index(module_id);

    match questions.get(index) {
        Some(question) => {
            state.set_module_index(module_id, index + 1);
            DeployStep::Question {
                question,
                progress: ModuleProgress {
                    current: index + 1,
                    total: questions.len(),
                },
            }
        }
        None => {
            state.mark_deployed(module_id);
            DeployStep::ModuleComplete
        }
    }
}
