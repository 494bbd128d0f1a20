mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use intake_catalog::Catalog;
use intake_classify::{ResponseClassifier, SymptomExtractor};
use intake_core::models::interview::InterviewState;
use intake_core::models::screening::Classification;
use intake_core::models::step::StepAction;
use intake_interview::locks::SessionLocks;
use intake_interview::{InterviewConfig, InterviewError, Orchestrator, SymptomWorkers};
use intake_storage::error::StorageError;
use intake_storage::{
    BoxFuture, MemorySessionStore, MemorySymptomStore, SessionStore, SymptomStore,
};

use common::{Offline, Stalled, orchestrator, risk_catalog};

#[tokio::test(start_paused = true)]
async fn stalled_classifier_falls_back_within_the_timeout() {
    let (orch, store) = orchestrator(risk_catalog(), Stalled);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    orch.get_next_step("s1", "p1", "trouble sleeping").await.unwrap();
    let step = orch.get_next_step("s1", "p1", "").await.unwrap();
    assert_eq!(step.question_id.as_deref(), Some("RISK_01"));

    let start = tokio::time::Instant::now();
    let step = orch
        .get_next_step("s1", "p1", "yeah, every day")
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
    assert_eq!(step.action, StepAction::AskQuestion);

    let state = store.snapshot("s1").await.unwrap();
    let score = state.screening_scores["RISK_01"];
    assert_eq!(score, Classification::Positive.score());
    assert_eq!(state.positive_screens, vec!["MDD"]);
}

#[tokio::test]
async fn concurrent_calls_for_one_session_are_serialized() {
    let (orch, store) = orchestrator(Catalog::standard().unwrap(), Offline);
    let orch = Arc::new(orch);

    orch.get_next_step("s1", "p1", "").await.unwrap();

    let a = tokio::spawn({
        let orch = Arc::clone(&orch);
        async move { orch.get_next_step("s1", "p1", "first answer").await }
    });
    let b = tokio::spawn({
        let orch = Arc::clone(&orch);
        async move { orch.get_next_step("s1", "p1", "second answer").await }
    });
    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    // Each call answered a different pending question.
    assert_ne!(a, b);
    let state = store.snapshot("s1").await.unwrap();
    assert_eq!(state.responses.len(), 2);
    assert!(state.responses.contains_key("OVERVIEW_01"));
    assert!(state.responses.contains_key("OVERVIEW_02"));
}

#[tokio::test]
async fn sessions_are_independent() {
    let (orch, store) = orchestrator(Catalog::standard().unwrap(), Offline);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    orch.get_next_step("s1", "p1", "answer").await.unwrap();
    let other = orch.get_next_step("s2", "p2", "").await.unwrap();

    assert_eq!(other.question_id.as_deref(), Some("OVERVIEW_01"));
    assert_eq!(store.snapshot("s1").await.unwrap().asked_questions.len(), 2);
    assert_eq!(store.snapshot("s2").await.unwrap().asked_questions.len(), 1);
}

#[tokio::test]
async fn patient_mismatch_is_an_error() {
    let (orch, _) = orchestrator(Catalog::standard().unwrap(), Offline);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    let err = orch.get_next_step("s1", "intruder", "").await.unwrap_err();

    assert!(matches!(
        err,
        InterviewError::Storage(StorageError::PatientMismatch { .. })
    ));
}

/// Loads fine, refuses every write.
struct ReadOnlyStore {
    saves: AtomicUsize,
}

impl SessionStore for ReadOnlyStore {
    fn get_or_create<'a>(
        &'a self,
        session_id: &'a str,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<InterviewState, StorageError>> {
        Box::pin(async move { Ok(InterviewState::new(session_id, patient_id)) })
    }

    fn save<'a>(&'a self, _state: &'a InterviewState) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::PutObject("bucket is read-only".to_string()))
        })
    }
}

#[tokio::test]
async fn persistence_failure_fails_the_step_without_retry() {
    let store = Arc::new(ReadOnlyStore {
        saves: AtomicUsize::new(0),
    });
    let orch = Orchestrator::new(
        Arc::new(Catalog::standard().unwrap()),
        store.clone(),
        ResponseClassifier::new(Arc::new(Offline), Duration::from_secs(2)),
        InterviewConfig::default(),
    );

    let err = orch.get_next_step("s1", "p1", "").await.unwrap_err();

    assert!(matches!(err, InterviewError::Storage(StorageError::PutObject(_))));
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn messages_feed_the_symptom_store() {
    let catalog = Catalog::standard().unwrap();
    let symptoms = Arc::new(MemorySymptomStore::new());
    let workers = SymptomWorkers::new(
        SymptomExtractor::new(
            None,
            Duration::from_secs(2),
            catalog.category_keywords().to_vec(),
        ),
        symptoms.clone(),
        8,
    );
    let orch = Orchestrator::new(
        Arc::new(catalog),
        Arc::new(MemorySessionStore::new()),
        ResponseClassifier::new(Arc::new(Offline), Duration::from_secs(2)),
        InterviewConfig::default(),
    )
    .with_symptom_workers(workers);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    orch.get_next_step("s1", "p1", "I have insomnia and feel hopeless")
        .await
        .unwrap();
    orch.get_next_step("s1", "p1", "The insomnia is worse at weekends")
        .await
        .unwrap();
    // Drains the queue.
    orch.retire("s1").await;

    let recorded = symptoms.get("s1").await.unwrap();
    let insomnia = recorded.iter().find(|s| s.name == "insomnia").unwrap();
    assert_eq!(insomnia.mentions, 2);
    assert_eq!(insomnia.category, "mood_disorders");
    assert!(recorded.iter().any(|s| s.name == "hopeless"));
}

#[tokio::test]
async fn full_symptom_queue_never_blocks_the_interview() {
    struct Blocked;

    impl SymptomStore for Blocked {
        fn get<'a>(
            &'a self,
            _session_id: &'a str,
        ) -> BoxFuture<'a, Result<Vec<intake_core::models::symptom::Symptom>, StorageError>>
        {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn upsert_all<'a>(
            &'a self,
            _session_id: &'a str,
            _symptoms: Vec<intake_core::models::symptom::Symptom>,
        ) -> BoxFuture<'a, Result<(), StorageError>> {
            Box::pin(std::future::pending())
        }
    }

    let catalog = Catalog::standard().unwrap();
    let workers = SymptomWorkers::new(
        SymptomExtractor::new(None, Duration::from_secs(2), catalog.category_keywords().to_vec()),
        Arc::new(Blocked),
        1,
    );
    let orch = Orchestrator::new(
        Arc::new(catalog),
        Arc::new(MemorySessionStore::new()),
        ResponseClassifier::new(Arc::new(Offline), Duration::from_secs(2)),
        InterviewConfig::default(),
    )
    .with_symptom_workers(workers);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    let step = tokio::time::timeout(Duration::from_secs(5), async {
        for _ in 0..4 {
            orch.get_next_step("s1", "p1", "feeling sad and tired")
                .await
                .unwrap();
        }
        orch.get_next_step("s1", "p1", "").await
    })
    .await
    .expect("interview steps never wait on symptom extraction")
    .unwrap();

    assert_eq!(step.action, StepAction::AskQuestion);
}

#[tokio::test]
async fn forgetting_a_held_session_lock_keeps_later_callers_serialized() {
    let locks = Arc::new(SessionLocks::new());
    let guard = locks.acquire("s1").await;

    locks.forget("s1").await;

    let waiter = {
        let locks = Arc::clone(&locks);
        tokio::spawn(async move {
            let _guard = locks.acquire("s1").await;
        })
    };
    tokio::task::yield_now().await;
    assert!(
        tokio::time::timeout(Duration::from_millis(50), locks.acquire("s1"))
            .await
            .is_err()
    );
    assert!(!waiter.is_finished());

    drop(guard);
    waiter.await.unwrap();
    let _again = locks.acquire("s1").await;
}

#[tokio::test]
async fn forgetting_an_idle_session_lock_releases_it() {
    let locks = SessionLocks::new();
    drop(locks.acquire("s1").await);

    locks.forget("s1").await;

    let fresh = tokio::time::timeout(Duration::from_millis(50), locks.acquire("s1")).await;
    assert!(fresh.is_ok());
}
