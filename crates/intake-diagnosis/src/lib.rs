//! intake-diagnosis
//!
//! The stateless diagnosis pipeline: category screen, candidate filtering,
//! criteria evaluation, and report synthesis. Every step is a function of
//! its inputs; nothing here touches session state.

pub mod candidates;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod report;
pub mod screen;

pub use config::DiagnosisConfig;
pub use engine::DiagnosisEngine;
pub use error::DiagnosisError;
