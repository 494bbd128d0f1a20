use thiserror::Error;

use intake_classify::ClassifierError;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("unexpected Converse response: {0}")]
    ResponseParse(String),
}

impl From<BedrockError> for ClassifierError {
    fn from(e: BedrockError) -> Self {
        match e {
            BedrockError::Invocation(msg) => ClassifierError::Invocation(msg),
            BedrockError::ResponseParse(msg) => ClassifierError::ResponseParse(msg),
        }
    }
}
