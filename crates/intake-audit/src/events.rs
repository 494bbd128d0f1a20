use std::fmt;

use serde::Serialize;
use tracing::info;

/// The auditable actions of an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SessionStarted,
    PhaseTransition,
    ScreenRecorded,
    ItemsSkipped,
    ModuleDeployed,
    DiagnosisGenerated,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionStarted => "session_started",
            Self::PhaseTransition => "phase_transition",
            Self::ScreenRecorded => "screen_recorded",
            Self::ItemsSkipped => "items_skipped",
            Self::ModuleDeployed => "module_deployed",
            Self::DiagnosisGenerated => "diagnosis_generated",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured audit event.
///
/// Logged via `tracing` so it lands wherever the subscriber writes; the
/// `audit.*` field prefix lets log pipelines route these separately.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub session_id: String,
    pub patient_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        session_id: impl Into<String>,
        patient_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            session_id: session_id.into(),
            patient_id: patient_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.session_id = %self.session_id,
            audit.patient_id = %self.patient_id,
            audit.details = %details,
            "audit event"
        );
    }
}
