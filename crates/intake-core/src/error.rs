use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown interview phase: {0}")]
    UnknownPhase(String),
}
