use std::sync::Arc;
use std::time::Duration;

use intake_classify::criteria::keyword_met_criteria;
use intake_classify::{BoxFuture, Classifier, ClassifierError, CriteriaJudge, SymptomExtractor};
use intake_core::models::category::Category;
use intake_core::models::disorder::{Criterion, DisorderDefinition};
use intake_core::models::symptom::Symptom;

struct Fixed(&'static str);

impl Classifier for Fixed {
    fn classify<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async move { Ok(self.0.to_string()) })
    }
}

struct Failing;

impl Classifier for Failing {
    fn classify<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async { Err(ClassifierError::Invocation("throttled".to_string())) })
    }
}

fn gad() -> DisorderDefinition {
    DisorderDefinition {
        disorder_id: "GAD".to_string(),
        disorder_name: "Generalized Anxiety Disorder".to_string(),
        category: Category::Anxiety,
        criteria: vec![
            Criterion::new("GAD.A", "Excessive anxiety and worry"),
            Criterion::new("GAD.B", "Restlessness or feeling on edge"),
            Criterion::new("GAD.C", "Muscle tension"),
        ],
        minimum_criteria_count: None,
        core_symptoms: None,
    }
}

fn symptoms() -> Vec<Symptom> {
    vec![
        Symptom::new("excessive worry", "anxiety_disorders", 0.7, 0.9),
        Symptom::new("restlessness", "anxiety_disorders", 0.5, 0.8),
    ]
}

#[tokio::test]
async fn model_json_is_filtered_to_known_ids_in_criteria_order() {
    let judge = CriteriaJudge::new(
        Arc::new(Fixed(
            "Here you go:\n```json\n{\"met\": [\"GAD.C\", \"GAD.A\", \"GAD.Z\"]}\n```",
        )),
        Duration::from_secs(1),
    );
    let met = judge.met_criteria(&gad(), &symptoms()).await;
    assert_eq!(met, vec!["GAD.A", "GAD.C"]);
}

#[tokio::test]
async fn failure_falls_back_to_keyword_overlap() {
    let judge = CriteriaJudge::new(Arc::new(Failing), Duration::from_secs(1));
    let met = judge.met_criteria(&gad(), &symptoms()).await;
    assert_eq!(met, keyword_met_criteria(&gad(), &symptoms()));
    assert_eq!(met, vec!["GAD.A", "GAD.B"]);
}

#[tokio::test]
async fn keyword_only_judge_never_calls_a_model() {
    let judge = CriteriaJudge::keyword_only();
    assert!(matches!(
        judge.try_met_criteria(&gad(), &symptoms()).await,
        Err(ClassifierError::Unavailable(_))
    ));
    assert!(judge.met_criteria(&gad(), &[]).await.is_empty());
}

#[tokio::test]
async fn extractor_parses_model_symptoms() {
    let extractor = SymptomExtractor::new(
        Some(Arc::new(Fixed(
            r#"{"symptoms": [{"name": " Insomnia ", "category": "mood_disorders", "severity": 1.4, "confidence": 0.8}, {"name": "", "severity": 0.1, "confidence": 0.1}]}"#,
        ))),
        Duration::from_secs(1),
        Vec::new(),
    );
    let found = extractor.extract("I can't sleep").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "insomnia");
    assert_eq!(found[0].severity, 1.0);
    assert_eq!(found[0].mentions, 1);
}

#[tokio::test]
async fn extractor_falls_back_to_keywords() {
    let extractor = SymptomExtractor::new(
        Some(Arc::new(Failing)),
        Duration::from_secs(1),
        vec![(Category::Anxiety, vec!["panic".to_string()])],
    );
    let found = extractor.extract("I had a panic attack at work").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "panic");
}
