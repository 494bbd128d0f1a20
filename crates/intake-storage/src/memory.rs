use std::collections::HashMap;

use tokio::sync::Mutex;

use intake_core::models::interview::InterviewState;
use intake_core::models::symptom::{Symptom, upsert_symptom};

use crate::error::StorageError;
use crate::store::{BoxFuture, SessionStore, SymptomStore};

/// Process-local session store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, InterviewState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved state, if any.
    pub async fn snapshot(&self, session_id: &str) -> Option<InterviewState> {
        self.sessions.lock().await.get(session_id).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_or_create<'a>(
        &'a self,
        session_id: &'a str,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<InterviewState, StorageError>> {
        Box::pin(async move {
            let mut sessions = self.sessions.lock().await;
            let state = sessions
                .entry(session_id.to_string())
                .or_insert_with(|| InterviewState::new(session_id, patient_id));
            if state.patient_id != patient_id {
                return Err(StorageError::PatientMismatch {
                    session_id: session_id.to_string(),
                });
            }
            Ok(state.clone())
        })
    }

    fn save<'a>(&'a self, state: &'a InterviewState) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.sessions
                .lock()
                .await
                .insert(state.session_id.clone(), state.clone());
            Ok(())
        })
    }
}

/// Process-local symptom store.
#[derive(Default)]
pub struct MemorySymptomStore {
    symptoms: Mutex<HashMap<String, Vec<Symptom>>>,
}

impl MemorySymptomStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SymptomStore for MemorySymptomStore {
    fn get<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Symptom>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .symptoms
                .lock()
                .await
                .get(session_id)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn upsert_all<'a>(
        &'a self,
        session_id: &'a str,
        symptoms: Vec<Symptom>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut all = self.symptoms.lock().await;
            let entry = all.entry(session_id.to_string()).or_default();
            for symptom in symptoms {
                upsert_symptom(entry, symptom);
            }
            Ok(())
        })
    }
}
