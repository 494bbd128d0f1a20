use std::future::Future;
use std::pin::Pin;

use intake_core::models::interview::InterviewState;
use intake_core::models::symptom::Symptom;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for interview state. Implementations do not retry; the
/// caller sees every failure.
///
/// Methods return boxed futures for dyn compatibility.
pub trait SessionStore: Send + Sync {
    /// Load the session, creating and persisting a fresh one on first use.
    /// An existing session owned by another patient is an error.
    fn get_or_create<'a>(
        &'a self,
        session_id: &'a str,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<InterviewState, StorageError>>;

    fn save<'a>(&'a self, state: &'a InterviewState) -> BoxFuture<'a, Result<(), StorageError>>;
}

/// Per-session symptom evidence keyed by symptom name.
pub trait SymptomStore: Send + Sync {
    /// All symptoms for the session; empty when none were recorded.
    fn get<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Symptom>, StorageError>>;

    /// Merge one symptom with upsert semantics (see
    /// [`intake_core::models::symptom::upsert_symptom`]).
    fn upsert<'a>(
        &'a self,
        session_id: &'a str,
        symptom: Symptom,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        self.upsert_all(session_id, vec![symptom])
    }

    /// Merge several symptoms in order, in one write where the backend
    /// allows it.
    fn upsert_all<'a>(
        &'a self,
        session_id: &'a str,
        symptoms: Vec<Symptom>,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}
