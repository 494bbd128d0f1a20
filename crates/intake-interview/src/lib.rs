//! intake-interview
//!
//! The interview orchestration state machine. Drives a session through
//! overview, screening, deep-dive, timeline, and summary phases, applying
//! skip-logic so a negative screen prunes dependent questions.

pub mod config;
pub mod deployer;
pub mod error;
pub mod locks;
pub mod orchestrator;
pub mod selector;
pub mod skip_logic;
pub mod symptoms;

pub use config::InterviewConfig;
pub use error::InterviewError;
pub use orchestrator::Orchestrator;
pub use symptoms::SymptomWorkers;
