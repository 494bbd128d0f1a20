//! intake-bedrock
//!
//! Bedrock Converse API implementation of the classification port.

pub mod client;
pub mod converse;
pub mod error;
pub mod usage;

pub use converse::BedrockClassifier;
