//! intake-cli
//!
//! Terminal harness for the intake interview: configuration, wiring of the
//! stores and classifiers, and the interactive session loop.

pub mod app;
pub mod config;
pub mod session;
