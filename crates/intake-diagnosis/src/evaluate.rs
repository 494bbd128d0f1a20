use intake_core::models::diagnosis::{DiagnosisResult, Severity};
use intake_core::models::disorder::DisorderDefinition;

/// Score a disorder given the ids of its met criteria.
///
/// Ids that are not criteria of `disorder` are ignored, and each criterion
/// counts once.
pub fn score_disorder(disorder: &DisorderDefinition, met: &[String]) -> DiagnosisResult {
    let met_criteria_ids: Vec<String> = disorder
        .criteria
        .iter()
        .filter(|c| met.contains(&c.criterion_id))
        .map(|c| c.criterion_id.clone())
        .collect();

    let met_count = met_criteria_ids.len();
    let total_criteria = disorder.total_criteria();
    let required_count = disorder.required_count();
    let confidence = if total_criteria == 0 {
        0.0
    } else {
        met_count as f64 / total_criteria as f64
    };

    DiagnosisResult {
        disorder_id: disorder.disorder_id.clone(),
        disorder_name: disorder.disorder_name.clone(),
        category: disorder.category,
        met_count,
        required_count,
        total_criteria,
        confidence,
        severity: Severity::from_ratio(confidence),
        met_criteria_ids,
        diagnosis_met: met_count >= required_count,
        is_primary: false,
    }
}
