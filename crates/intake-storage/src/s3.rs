use aws_sdk_s3::Client;
use tracing::{debug, info};

use intake_core::models::interview::InterviewState;
use intake_core::models::symptom::{Symptom, upsert_symptom};
use intake_core::s3_keys;

use crate::error::StorageError;
use crate::objects::{JsonBucket, WriteMode};
use crate::store::{BoxFuture, SessionStore, SymptomStore};

/// Attempts for a symptom merge that loses an ETag race.
const UPSERT_ATTEMPTS: usize = 3;

/// Session state as one JSON object per session.
#[derive(Clone)]
pub struct S3SessionStore {
    bucket: JsonBucket,
}

impl S3SessionStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            bucket: JsonBucket::new(client, bucket),
        }
    }
}

impl SessionStore for S3SessionStore {
    fn get_or_create<'a>(
        &'a self,
        session_id: &'a str,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<InterviewState, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::interview_state(session_id);
            match self.bucket.read::<InterviewState>(&key).await? {
                Some(stored) if stored.value.patient_id != patient_id => {
                    Err(StorageError::PatientMismatch {
                        session_id: session_id.to_string(),
                    })
                }
                Some(stored) => Ok(stored.value),
                None => {
                    let state = InterviewState::new(session_id, patient_id);
                    self.bucket.write(&key, &state, WriteMode::Create).await?;
                    info!(session_id, bucket = %self.bucket.name(), "interview session created");
                    Ok(state)
                }
            }
        })
    }

    fn save<'a>(&'a self, state: &'a InterviewState) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let key = s3_keys::interview_state(&state.session_id);
            self.bucket.write(&key, state, WriteMode::Overwrite).await?;
            debug!(session_id = %state.session_id, phase = %state.phase, "interview state saved");
            Ok(())
        })
    }
}

/// Symptom list as one JSON array per session.
#[derive(Clone)]
pub struct S3SymptomStore {
    bucket: JsonBucket,
}

impl S3SymptomStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            bucket: JsonBucket::new(client, bucket),
        }
    }

    async fn load(&self, key: &str) -> Result<(Vec<Symptom>, Option<String>), StorageError> {
        Ok(match self.bucket.read::<Vec<Symptom>>(key).await? {
            Some(stored) => (stored.value, Some(stored.etag)),
            None => (Vec::new(), None),
        })
    }
}

impl SymptomStore for S3SymptomStore {
    fn get<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Symptom>, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::symptoms(session_id);
            Ok(self.load(&key).await?.0)
        })
    }

    fn upsert_all<'a>(
        &'a self,
        session_id: &'a str,
        symptoms: Vec<Symptom>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let key = s3_keys::symptoms(session_id);
            let mut attempt = 1;
            loop {
                let (mut current, etag) = self.load(&key).await?;
                for symptom in symptoms.iter().cloned() {
                    upsert_symptom(&mut current, symptom);
                }
                let mode = match etag.as_deref() {
                    Some(etag) => WriteMode::Replace(etag),
                    None => WriteMode::Create,
                };
                match self.bucket.write(&key, &current, mode).await {
                    Ok(_) => return Ok(()),
                    Err(StorageError::PreconditionFailed { .. }) if attempt < UPSERT_ATTEMPTS => {
                        debug!(session_id, attempt, "symptom merge lost a write race, retrying");
                        attempt += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        })
    }
}
