//! intake-classify
//!
//! The free-text classification port and everything built on top of it:
//! three-way answer classification, criteria judgement, and symptom
//! extraction. Every model-backed path has a pure keyword fallback that runs
//! when the port fails or exceeds its timeout.

pub mod criteria;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod port;
pub mod response;

pub use criteria::CriteriaJudge;
pub use error::ClassifierError;
pub use extract::SymptomExtractor;
pub use port::{BoxFuture, Classifier};
pub use response::ResponseClassifier;
