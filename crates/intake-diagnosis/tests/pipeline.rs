use std::sync::Arc;
use std::time::Duration;

use intake_catalog::Catalog;
use intake_classify::{BoxFuture, Classifier, ClassifierError, CriteriaJudge};
use intake_core::models::category::Category;
use intake_core::models::diagnosis::{DiagnosisOutcome, Severity};
use intake_core::models::symptom::Symptom;
use intake_diagnosis::evaluate::score_disorder;
use intake_diagnosis::report::generic_recommendations;
use intake_diagnosis::{DiagnosisConfig, DiagnosisEngine};

fn symptom(name: &str) -> Symptom {
    Symptom::new(name, "mood_disorders", 0.8, 0.9)
}

fn keyword_engine() -> DiagnosisEngine {
    DiagnosisEngine::new(
        Arc::new(Catalog::standard().unwrap()),
        CriteriaJudge::keyword_only(),
        DiagnosisConfig::default(),
    )
}

/// Six of the nine MDD criteria by keyword overlap: A1, A4, A6, A7, A8, A9.
fn six_mdd_symptoms() -> Vec<Symptom> {
    [
        "depressed mood",
        "insomnia",
        "fatigue",
        "excessive guilt",
        "cannot concentrate",
        "suicidal thoughts",
    ]
    .into_iter()
    .map(symptom)
    .collect()
}

#[test]
fn six_of_nine_mdd_criteria_is_a_moderate_diagnosis() {
    let catalog = Catalog::standard().unwrap();
    let mdd = catalog.disorder("MDD").unwrap();
    let met: Vec<String> = ["A1", "A2", "A3", "A4", "A5", "A6"]
        .iter()
        .map(|c| format!("MDD.{c}"))
        .collect();

    let result = score_disorder(mdd, &met);

    assert_eq!(result.met_count, 6);
    assert_eq!(result.required_count, 5);
    assert_eq!(result.total_criteria, 9);
    assert!((result.confidence - 0.67).abs() < 0.005);
    assert!(result.diagnosis_met);
    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.severity.as_str(), "moderate");
}

#[test]
fn unknown_and_repeated_ids_do_not_count() {
    let catalog = Catalog::standard().unwrap();
    let mdd = catalog.disorder("MDD").unwrap();
    let met = vec![
        "MDD.A1".to_string(),
        "MDD.A1".to_string(),
        "GAD.A".to_string(),
    ];

    let result = score_disorder(mdd, &met);

    assert_eq!(result.met_criteria_ids, vec!["MDD.A1"]);
    assert!(!result.diagnosis_met);
    assert_eq!(result.severity, Severity::Mild);
}

#[test]
fn unset_minimum_defaults_to_half_the_criteria() {
    let catalog = Catalog::standard().unwrap();
    // Eight criteria, no minimum.
    let gad = catalog.disorder("GAD").unwrap();
    let met: Vec<String> = ["GAD.A", "GAD.B", "GAD.C1", "GAD.C2"]
        .iter()
        .map(|c| c.to_string())
        .collect();

    let result = score_disorder(gad, &met);

    assert_eq!(result.required_count, 4);
    assert!(result.diagnosis_met);
}

#[tokio::test]
async fn keyword_overlap_evaluates_mdd() {
    let engine = keyword_engine();

    let outcome = engine.evaluate_disorder("MDD", &six_mdd_symptoms()).await;

    let result = outcome.result().unwrap();
    assert_eq!(
        result.met_criteria_ids,
        vec!["MDD.A1", "MDD.A4", "MDD.A6", "MDD.A7", "MDD.A8", "MDD.A9"]
    );
    assert!(result.diagnosis_met);
}

#[tokio::test]
async fn unknown_disorder_is_not_found_without_aborting_the_batch() {
    let engine = keyword_engine();
    let ids = vec!["NOPE".to_string(), "MDD".to_string()];

    let outcomes = engine.evaluate_all(&ids, &six_mdd_symptoms()).await;

    assert_eq!(
        outcomes[0],
        DiagnosisOutcome::NotFound {
            disorder_id: "NOPE".to_string()
        }
    );
    assert!(outcomes[1].result().unwrap().diagnosis_met);
}

#[tokio::test]
async fn empty_symptoms_fall_back_and_report_no_conditions() {
    let engine = keyword_engine();

    let report = engine.run_pipeline(&[]).await;

    assert_eq!(report.categories.categories, vec![Category::Mood]);
    assert_eq!(report.categories.confidence, 0.5);
    assert_eq!(report.candidates, vec!["MDD"]);
    assert_eq!(report.diagnoses.len(), 1);
    assert!(!report.conditions_met);
    assert!(report.primary.is_none());
    assert!(report.differentials.is_empty());
    assert!(report.report.contains("No diagnostic criteria were met"));
    assert_eq!(report.recommendations, generic_recommendations());
}

#[tokio::test]
async fn full_pipeline_confirms_mdd() {
    let engine = keyword_engine();

    let report = engine.run_pipeline(&six_mdd_symptoms()).await;

    assert_eq!(report.candidates, vec!["MDD"]);
    let primary = report.primary.as_ref().unwrap();
    assert_eq!(primary.disorder_id, "MDD");
    assert!(primary.is_primary);
    assert!(report.conditions_met);
    assert!(report.report.contains("Major Depressive Disorder (moderate)"));
    assert!(report.report.contains("6 of 9 criteria met"));
    assert!(report.report.contains("Screened categories: Mood"));
    assert_ne!(report.recommendations, generic_recommendations());
}

#[tokio::test]
async fn candidates_are_capped_at_three() {
    let engine = keyword_engine();
    let symptoms: Vec<Symptom> = [
        "depressed mood",
        "chronic hopelessness",
        "manic episodes",
        "constant worry",
        "panic attacks",
    ]
    .into_iter()
    .map(symptom)
    .collect();

    let report = engine.run_pipeline(&symptoms).await;

    assert_eq!(report.candidates, vec!["MDD", "PDD", "BIPOLAR_I"]);
    assert_eq!(report.diagnoses.len(), 3);
}

/// Reports every criterion as met.
struct AllMet;

impl Classifier for AllMet {
    fn classify<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async move {
            let ids: Vec<String> = prompt
                .lines()
                .filter_map(|l| l.strip_prefix("- "))
                .filter_map(|l| l.split_once(':').map(|(id, _)| format!("\"{id}\"")))
                .collect();
            Ok(format!("{{\"met\": [{}]}}", ids.join(", ")))
        })
    }
}

#[tokio::test]
async fn model_judgement_is_used_when_available() {
    let engine = DiagnosisEngine::new(
        Arc::new(Catalog::standard().unwrap()),
        CriteriaJudge::new(Arc::new(AllMet), Duration::from_secs(2)),
        DiagnosisConfig::default(),
    );

    let outcome = engine.evaluate_disorder("PANIC", &[symptom("panic attacks")]).await;

    let result = outcome.result().unwrap();
    assert_eq!(result.met_count, 5);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.severity, Severity::Severe);
}
