//! intake-audit
//!
//! Application-level audit events for interview and diagnosis actions,
//! emitted through `tracing`.

pub mod events;

pub use events::{AuditAction, AuditEvent};
