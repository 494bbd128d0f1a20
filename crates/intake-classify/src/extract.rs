use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use intake_core::models::category::Category;
use intake_core::models::symptom::Symptom;

use crate::error::ClassifierError;
use crate::fallback::keyword_symptoms;
use crate::port::{Classifier, classify_with_timeout, json_object};

const EXTRACTION_PROMPT: &str = "\
Extract the mental health symptoms the patient describes in the message \
below. Use short lower-case symptom names (for example \"depressed mood\", \
\"insomnia\", \"panic attacks\"). Rate severity and your confidence from 0 \
to 1. Respond with JSON only, in the form \
{\"symptoms\": [{\"name\": \"...\", \"category\": \"...\", \"severity\": 0.0, \"confidence\": 0.0}]}. \
Return an empty list if no symptoms are described.";

#[derive(Deserialize)]
struct ExtractedSymptoms {
    symptoms: Vec<ExtractedSymptom>,
}

#[derive(Deserialize)]
struct ExtractedSymptom {
    name: String,
    #[serde(default)]
    category: String,
    severity: f64,
    confidence: f64,
}

/// Pulls symptom evidence out of free text.
#[derive(Clone)]
pub struct SymptomExtractor {
    classifier: Option<Arc<dyn Classifier>>,
    timeout: Duration,
    keywords: Vec<(Category, Vec<String>)>,
}

impl SymptomExtractor {
    pub fn new(
        classifier: Option<Arc<dyn Classifier>>,
        timeout: Duration,
        keywords: Vec<(Category, Vec<String>)>,
    ) -> Self {
        Self {
            classifier,
            timeout,
            keywords,
        }
    }

    pub async fn try_extract(&self, text: &str) -> Result<Vec<Symptom>, ClassifierError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or_else(|| ClassifierError::Unavailable("no classifier configured".to_string()))?;

        let prompt = format!("{EXTRACTION_PROMPT}\n\nMessage: {text}");
        let reply = classify_with_timeout(classifier.as_ref(), &prompt, self.timeout).await?;
        let parsed: ExtractedSymptoms = serde_json::from_str(json_object(&reply)?)?;

        Ok(parsed
            .symptoms
            .into_iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| {
                Symptom::new(
                    s.name.trim().to_lowercase(),
                    s.category,
                    s.severity,
                    s.confidence,
                )
            })
            .collect())
    }

    /// Extract symptoms, falling back to category keyword matches on any
    /// port error.
    pub async fn extract(&self, text: &str) -> Vec<Symptom> {
        match self.try_extract(text).await {
            Ok(symptoms) => {
                debug!(count = symptoms.len(), "symptoms extracted");
                symptoms
            }
            Err(e) => {
                if self.classifier.is_some() {
                    warn!(error = %e, "symptom extraction failed, using keyword fallback");
                }
                keyword_symptoms(text, &self.keywords)
            }
        }
    }
}
