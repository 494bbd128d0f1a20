use std::sync::Arc;

use tracing::{debug, info, warn};

use intake_catalog::Catalog;
use intake_classify::CriteriaJudge;
use intake_core::models::diagnosis::{CategoryScreen, DiagnosisOutcome, DiagnosisReport};
use intake_core::models::symptom::Symptom;

use crate::candidates::filter_candidates;
use crate::config::DiagnosisConfig;
use crate::evaluate::score_disorder;
use crate::report::synthesize;
use crate::screen::screen_categories;

/// Runs the diagnosis pipeline against the disorder catalog.
///
/// Holds no per-session state; one engine can serve concurrent requests.
pub struct DiagnosisEngine {
    catalog: Arc<Catalog>,
    judge: CriteriaJudge,
    config: DiagnosisConfig,
}

impl DiagnosisEngine {
    pub fn new(catalog: Arc<Catalog>, judge: CriteriaJudge, config: DiagnosisConfig) -> Self {
        Self {
            catalog,
            judge,
            config,
        }
    }

    pub fn config(&self) -> &DiagnosisConfig {
        &self.config
    }

    pub fn screen_categories(&self, symptoms: &[Symptom]) -> CategoryScreen {
        screen_categories(symptoms, self.catalog.category_keywords(), &self.config)
    }

    pub fn filter_candidates(&self, screen: &CategoryScreen, symptoms: &[Symptom]) -> Vec<String> {
        filter_candidates(&self.catalog, &screen.categories, symptoms)
    }

    /// Evaluate one disorder. An id missing from the catalog is a
    /// [`DiagnosisOutcome::NotFound`], not an error.
    pub async fn evaluate_disorder(
        &self,
        disorder_id: &str,
        symptoms: &[Symptom],
    ) -> DiagnosisOutcome {
        let Some(disorder) = self.catalog.disorder(disorder_id) else {
            warn!(disorder_id, "disorder not in catalog");
            return DiagnosisOutcome::NotFound {
                disorder_id: disorder_id.to_string(),
            };
        };

        let met = self.judge.met_criteria(disorder, symptoms).await;
        let result = score_disorder(disorder, &met);
        debug!(
            disorder_id,
            met = result.met_count,
            required = result.required_count,
            confidence = result.confidence,
            diagnosis_met = result.diagnosis_met,
            "disorder evaluated"
        );
        DiagnosisOutcome::Evaluated(result)
    }

    /// Evaluate several disorders in order. Unknown ids yield `NotFound`
    /// entries and the rest of the batch still runs.
    pub async fn evaluate_all(
        &self,
        disorder_ids: &[String],
        symptoms: &[Symptom],
    ) -> Vec<DiagnosisOutcome> {
        let mut outcomes = Vec::with_capacity(disorder_ids.len());
        for id in disorder_ids {
            outcomes.push(self.evaluate_disorder(id, symptoms).await);
        }
        outcomes
    }

    /// Screen, filter, evaluate, and synthesize. Always produces a report.
    pub async fn run_pipeline(&self, symptoms: &[Symptom]) -> DiagnosisReport {
        let screen = self.screen_categories(symptoms);

        let mut candidates = self.filter_candidates(&screen, symptoms);
        if candidates.is_empty() {
            warn!(
                fallback = %self.config.fallback_disorder,
                "no candidate disorders, evaluating fallback"
            );
            candidates.push(self.config.fallback_disorder.clone());
        }
        candidates.truncate(self.config.max_candidates);

        let outcomes = self.evaluate_all(&candidates, symptoms).await;
        let report = synthesize(screen, candidates, outcomes);

        info!(
            report_id = %report.id,
            symptoms = symptoms.len(),
            candidates = report.candidates.len(),
            conditions_met = report.conditions_met,
            primary = report.primary.as_ref().map(|p| p.disorder_id.as_str()).unwrap_or("none"),
            "diagnosis pipeline complete"
        );
        report
    }
}
