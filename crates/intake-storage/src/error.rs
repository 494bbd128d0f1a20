use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("write precondition failed for {key}")]
    PreconditionFailed { key: String },

    #[error("session {session_id} belongs to a different patient")]
    PatientMismatch { session_id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}
