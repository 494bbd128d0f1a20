#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use intake_catalog::{Catalog, CatalogData};
use intake_classify::{BoxFuture, Classifier, ClassifierError, ResponseClassifier};
use intake_core::models::category::Category;
use intake_core::models::module::{Module, Question};
use intake_core::models::screening::ScreeningItem;
use intake_interview::{InterviewConfig, Orchestrator};
use intake_storage::MemorySessionStore;

/// Always fails, so every answer goes through the keyword fallback:
/// "yes" screens positive, "no" negative.
pub struct Offline;

impl Classifier for Offline {
    fn classify<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async { Err(ClassifierError::Unavailable("offline".to_string())) })
    }
}

pub struct Fixed(pub &'static str);

impl Classifier for Fixed {
    fn classify<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async move { Ok(self.0.to_string()) })
    }
}

/// Never replies within any reasonable timeout.
pub struct Stalled;

impl Classifier for Stalled {
    fn classify<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("AMBIGUOUS".to_string())
        })
    }
}

pub fn screening_item(id: &str, category: Category, links: &[&str], skip: bool) -> ScreeningItem {
    ScreeningItem {
        id: id.to_string(),
        text: format!("Screening question {id}?"),
        category,
        linked_modules: links.iter().map(|m| m.to_string()).collect(),
        skip_module_if_negative: skip,
    }
}

pub fn module(id: &str, category: Category, weight: f64, questions: usize) -> Module {
    Module {
        id: id.to_string(),
        name: id.to_string(),
        category,
        priority_weight: weight,
        questions: (1..=questions)
            .map(|n| Question::new(format!("{id}_Q{n}"), format!("{id} question {n}?")))
            .collect(),
    }
}

/// One overview and one timeline question, a risk item that prunes the
/// other MDD items when denied, and one anxiety item.
pub fn risk_catalog() -> Catalog {
    let data = CatalogData {
        overview: vec![Question::new("OV_1", "What brings you in?")],
        timeline: vec![Question::new("TL_1", "How long has this lasted?")],
        screening_items: vec![
            screening_item("RISK_01", Category::Mood, &["MDD"], true),
            screening_item("MDD_02", Category::Mood, &["MDD"], false),
            screening_item("MDD_03", Category::Mood, &["MDD"], false),
            screening_item("ANX_01", Category::Anxiety, &["GAD"], false),
        ],
        modules: vec![
            module("MDD", Category::Mood, 1.0, 2),
            module("GAD", Category::Anxiety, 0.9, 1),
        ],
        ..CatalogData::default()
    };
    Catalog::from_data(data).expect("valid catalog")
}

pub fn orchestrator(
    catalog: Catalog,
    port: impl Classifier + 'static,
) -> (Orchestrator, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let orchestrator = Orchestrator::new(
        Arc::new(catalog),
        store.clone(),
        ResponseClassifier::new(Arc::new(port), Duration::from_secs(2)),
        InterviewConfig::default(),
    );
    (orchestrator, store)
}
