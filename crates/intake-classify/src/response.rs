use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use intake_core::models::screening::Classification;

use crate::error::ClassifierError;
use crate::fallback::keyword_classification;
use crate::port::{Classifier, classify_with_timeout};

const RESPONSE_PROMPT: &str = "\
You are assisting with a structured clinical screening interview. \
Classify the patient's answer to the question below.\n\
Reply with exactly one word:\n\
POSITIVE if the answer endorses the symptom or experience,\n\
NEGATIVE if the answer denies it,\n\
AMBIGUOUS if the answer is unclear, hedged, or off-topic.";

/// Three-way classification of a patient's answer to a screening question.
#[derive(Clone)]
pub struct ResponseClassifier {
    classifier: Option<Arc<dyn Classifier>>,
    timeout: Duration,
}

impl ResponseClassifier {
    pub fn new(classifier: Arc<dyn Classifier>, timeout: Duration) -> Self {
        Self {
            classifier: Some(classifier),
            timeout,
        }
    }

    /// A classifier that always uses the keyword heuristic.
    pub fn keyword_only() -> Self {
        Self {
            classifier: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Classify via the port only. Timeouts and unparseable replies are
    /// errors.
    pub async fn try_classify(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<Classification, ClassifierError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or_else(|| ClassifierError::Unavailable("no classifier configured".to_string()))?;

        let prompt = build_prompt(question, answer);
        let reply = classify_with_timeout(classifier.as_ref(), &prompt, self.timeout).await?;
        parse_classification(&reply)
    }

    /// Classify, falling back to [`keyword_classification`] on any port
    /// error. Always completes.
    pub async fn classify(&self, question: &str, answer: &str) -> Classification {
        match self.try_classify(question, answer).await {
            Ok(classification) => {
                debug!(%classification, "answer classified");
                classification
            }
            Err(e) => {
                let classification = keyword_classification(answer);
                if self.classifier.is_some() {
                    warn!(error = %e, %classification, "classifier failed, using keyword fallback");
                }
                classification
            }
        }
    }
}

fn build_prompt(question: &str, answer: &str) -> String {
    format!("{RESPONSE_PROMPT}\n\nQuestion: {question}\nAnswer: {answer}\n\nClassification:")
}

/// Read a three-way label out of model output. The earliest label in the
/// reply wins.
pub fn parse_classification(reply: &str) -> Result<Classification, ClassifierError> {
    let upper = reply.to_uppercase();
    let labels = [
        Classification::Ambiguous,
        Classification::Positive,
        Classification::Negative,
    ];
    labels
        .into_iter()
        .filter_map(|label| upper.find(label.as_str()).map(|pos| (pos, label)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, label)| label)
        .ok_or_else(|| ClassifierError::ResponseParse(format!("no classification label in: {reply}")))
}
