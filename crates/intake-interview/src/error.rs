use thiserror::Error;

use intake_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
