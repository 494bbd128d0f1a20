//! The interactive session loop.

use std::io::Write;

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use intake_audit::{AuditAction, AuditEvent};
use intake_core::models::diagnosis::DiagnosisReport;
use intake_core::models::interview::InterviewPhase;
use intake_core::models::step::{NextStep, StepAction};

use crate::app::App;

/// Ask questions read from `input` until the interview completes or the
/// input ends. Returns the final step when the interview completed.
///
/// Stopping early leaves the session as last persisted, so a later run with
/// the same session id resumes where this one stopped.
pub async fn run_interview<R, W>(
    app: &App,
    session_id: &str,
    patient_id: &str,
    input: R,
    out: &mut W,
) -> eyre::Result<Option<NextStep>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut message = String::new();

    loop {
        let step = app
            .orchestrator
            .get_next_step(session_id, patient_id, &message)
            .await?;
        message.clear();

        match step.action {
            StepAction::AskQuestion => {
                if let (Some(module_id), Some(progress)) = (&step.module_id, step.progress) {
                    write!(out, "[{module_id} {}/{}] ", progress.current, progress.total)?;
                }
                writeln!(out, "{}", step.question_text.as_deref().unwrap_or_default())?;
                write!(out, "> ")?;
                out.flush()?;

                match lines.next_line().await? {
                    Some(line) => message = line,
                    None => {
                        writeln!(out)?;
                        return Ok(None);
                    }
                }
            }
            StepAction::Transition => {
                writeln!(out, "\n== {} ==", phase_title(step.phase))?;
            }
            StepAction::Complete => {
                let modules = step.modules_assessed.clone().unwrap_or_default();
                if modules.is_empty() {
                    writeln!(out, "Interview complete. No modules were needed.")?;
                } else {
                    writeln!(
                        out,
                        "Interview complete. Modules assessed: {}.",
                        modules.join(", ")
                    )?;
                }
                return Ok(Some(step));
            }
        }
    }
}

/// Run the diagnosis pipeline over the session's recorded symptoms and
/// print the narrative.
///
/// Retires the session first so every queued message has been through
/// symptom extraction.
pub async fn diagnose<W: Write>(
    app: &App,
    session_id: &str,
    patient_id: &str,
    out: &mut W,
) -> eyre::Result<DiagnosisReport> {
    app.orchestrator.retire(session_id).await;

    let symptoms = app.symptoms.get(session_id).await?;
    let report = app.engine.run_pipeline(&symptoms).await;

    AuditEvent::new(AuditAction::DiagnosisGenerated, session_id, patient_id)
        .with_details(json!({
            "report_id": report.id,
            "symptoms": symptoms.len(),
            "primary": report.primary.as_ref().map(|p| &p.disorder_id),
            "conditions_met": report.conditions_met,
        }))
        .emit();

    writeln!(out, "\n== Diagnostic summary ==")?;
    writeln!(out, "{}", report.report.trim_end())?;
    Ok(report)
}

fn phase_title(phase: InterviewPhase) -> &'static str {
    match phase {
        InterviewPhase::Overview => "Overview",
        InterviewPhase::Screening => "Screening",
        InterviewPhase::DeepDive => "Follow-up questions",
        InterviewPhase::Timeline => "Timeline",
        InterviewPhase::Summary => "Summary",
    }
}
