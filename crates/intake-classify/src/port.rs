use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::ClassifierError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Raw text-in, text-out classification capability, typically a language
/// model call.
///
/// Methods return boxed futures for dyn compatibility.
pub trait Classifier: Send + Sync {
    fn classify<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>>;
}

/// Run `classifier` with a bounded wait. Elapsed time maps to
/// [`ClassifierError::Timeout`].
pub async fn classify_with_timeout(
    classifier: &dyn Classifier,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ClassifierError> {
    match tokio::time::timeout(timeout, classifier.classify(prompt)).await {
        Ok(result) => result,
        Err(_) => Err(ClassifierError::Timeout(timeout)),
    }
}

/// Extract the outermost `{...}` span from model output that may wrap JSON
/// in prose or code fences.
pub(crate) fn json_object(text: &str) -> Result<&str, ClassifierError> {
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(s), Some(e)) if e > s => Ok(&text[s..=e]),
        _ => Err(ClassifierError::ResponseParse(format!(
            "no JSON object in response: {text}"
        ))),
    }
}
