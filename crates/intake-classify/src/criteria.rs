use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::symptom::{Symptom, symptom_text};

use crate::error::ClassifierError;
use crate::fallback::criterion_met_by_overlap;
use crate::port::{Classifier, classify_with_timeout, json_object};

const CRITERIA_PROMPT: &str = "\
You are assisting a clinician reviewing diagnostic criteria. Given the \
criteria for one disorder and the symptoms reported by a patient, decide \
which criteria are supported by the reported symptoms. Only mark a \
criterion as met when a reported symptom clearly supports it.\n\
Respond with JSON only, in the form {\"met\": [\"<criterion_id>\", ...]}.";

#[derive(Deserialize)]
struct MetCriteria {
    met: Vec<String>,
}

/// Decides which of a disorder's criteria the symptom set satisfies.
#[derive(Clone)]
pub struct CriteriaJudge {
    classifier: Option<Arc<dyn Classifier>>,
    timeout: Duration,
}

impl CriteriaJudge {
    pub fn new(classifier: Arc<dyn Classifier>, timeout: Duration) -> Self {
        Self {
            classifier: Some(classifier),
            timeout,
        }
    }

    /// A judge that always uses keyword overlap.
    pub fn keyword_only() -> Self {
        Self {
            classifier: None,
            timeout: Duration::ZERO,
        }
    }

    /// Met criterion ids from the port, in criteria order. Ids the model
    /// invents are dropped.
    pub async fn try_met_criteria(
        &self,
        disorder: &DisorderDefinition,
        symptoms: &[Symptom],
    ) -> Result<Vec<String>, ClassifierError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or_else(|| ClassifierError::Unavailable("no classifier configured".to_string()))?;

        let prompt = build_prompt(disorder, symptoms);
        let reply = classify_with_timeout(classifier.as_ref(), &prompt, self.timeout).await?;
        let parsed: MetCriteria = serde_json::from_str(json_object(&reply)?)?;

        Ok(disorder
            .criteria
            .iter()
            .filter(|c| parsed.met.iter().any(|m| m == &c.criterion_id))
            .map(|c| c.criterion_id.clone())
            .collect())
    }

    /// Met criterion ids, falling back to [`keyword_met_criteria`] on any
    /// port error.
    pub async fn met_criteria(
        &self,
        disorder: &DisorderDefinition,
        symptoms: &[Symptom],
    ) -> Vec<String> {
        match self.try_met_criteria(disorder, symptoms).await {
            Ok(met) => {
                debug!(disorder_id = %disorder.disorder_id, met = met.len(), "criteria judged");
                met
            }
            Err(e) => {
                if self.classifier.is_some() {
                    warn!(
                        disorder_id = %disorder.disorder_id,
                        error = %e,
                        "criteria judgement failed, using keyword overlap"
                    );
                }
                keyword_met_criteria(disorder, symptoms)
            }
        }
    }
}

/// Criteria whose keywords overlap the concatenated symptom names.
pub fn keyword_met_criteria(disorder: &DisorderDefinition, symptoms: &[Symptom]) -> Vec<String> {
    let text = symptom_text(symptoms);
    disorder
        .criteria
        .iter()
        .filter(|c| criterion_met_by_overlap(&c.text, &text))
        .map(|c| c.criterion_id.clone())
        .collect()
}

fn build_prompt(disorder: &DisorderDefinition, symptoms: &[Symptom]) -> String {
    let mut prompt = format!(
        "{CRITERIA_PROMPT}\n\n## {} ({})\n",
        disorder.disorder_name, disorder.disorder_id
    );
    for criterion in &disorder.criteria {
        prompt.push_str(&format!("- {}: {}\n", criterion.criterion_id, criterion.text));
    }
    prompt.push_str("\n## Reported symptoms\n");
    if symptoms.is_empty() {
        prompt.push_str("- none reported\n");
    }
    for s in symptoms {
        prompt.push_str(&format!(
            "- {} (severity {:.2}, confidence {:.2})\n",
            s.name, s.severity, s.confidence
        ));
    }
    prompt
}
