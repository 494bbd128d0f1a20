use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use intake_bedrock::BedrockClassifier;
use intake_catalog::Catalog;
use intake_classify::{Classifier, CriteriaJudge, ResponseClassifier, SymptomExtractor};
use intake_diagnosis::DiagnosisEngine;
use intake_interview::{Orchestrator, SymptomWorkers};
use intake_storage::{
    MemorySessionStore, MemorySymptomStore, S3SessionStore, S3SymptomStore, SessionStore,
    SymptomStore,
};

use crate::config::{IntakeConfig, StorageBackend};

/// Everything a session needs, built once from config.
pub struct App {
    pub orchestrator: Orchestrator,
    pub engine: DiagnosisEngine,
    pub symptoms: Arc<dyn SymptomStore>,
}

pub async fn build(config: &IntakeConfig) -> eyre::Result<App> {
    let catalog = Arc::new(Catalog::standard()?);
    let timeout = Duration::from_millis(config.classifier_timeout_ms);

    let classifier: Option<Arc<dyn Classifier>> = if config.offline {
        info!("offline mode, using keyword heuristics only");
        None
    } else {
        let sdk_config = intake_bedrock::client::build_config(&config.region).await;
        let client = intake_bedrock::client::build_client(&sdk_config);
        let bedrock: Arc<dyn Classifier> =
            Arc::new(BedrockClassifier::new(client, &config.model_id));
        Some(bedrock)
    };

    let sessions: Arc<dyn SessionStore>;
    let symptoms: Arc<dyn SymptomStore>;
    match &config.storage {
        StorageBackend::Memory => {
            sessions = Arc::new(MemorySessionStore::new());
            symptoms = Arc::new(MemorySymptomStore::new());
        }
        StorageBackend::S3 { bucket } => {
            let client = intake_storage::client::build_client(&config.region).await;
            info!(bucket = %bucket, "using S3 storage");
            sessions = Arc::new(S3SessionStore::new(client.clone(), bucket));
            symptoms = Arc::new(S3SymptomStore::new(client, bucket));
        }
    }

    let responses = match &classifier {
        Some(c) => ResponseClassifier::new(Arc::clone(c), timeout),
        None => ResponseClassifier::keyword_only(),
    };
    let judge = match &classifier {
        Some(c) => CriteriaJudge::new(Arc::clone(c), timeout),
        None => CriteriaJudge::keyword_only(),
    };
    let extractor = SymptomExtractor::new(
        classifier,
        timeout,
        catalog.category_keywords().to_vec(),
    );

    let workers = SymptomWorkers::new(
        extractor,
        Arc::clone(&symptoms),
        config.symptom_channel_capacity,
    );
    let orchestrator = Orchestrator::new(
        Arc::clone(&catalog),
        sessions,
        responses,
        config.interview.clone(),
    )
    .with_symptom_workers(workers);
    let engine = DiagnosisEngine::new(catalog, judge, config.diagnosis.clone());

    Ok(App {
        orchestrator,
        engine,
        symptoms,
    })
}
