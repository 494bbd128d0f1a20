use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use intake_audit::{AuditAction, AuditEvent};
use intake_catalog::{Catalog, QuestionKind};
use intake_classify::ResponseClassifier;
use intake_core::models::interview::{InterviewPhase, InterviewState};
use intake_core::models::step::{ModuleProgress, NextStep};
use intake_storage::SessionStore;

use crate::config::InterviewConfig;
use crate::deployer::{self, DeployStep};
use crate::error::InterviewError;
use crate::locks::SessionLocks;
use crate::selector;
use crate::skip_logic;
use crate::symptoms::SymptomWorkers;

/// Drives interview sessions. One orchestrator serves any number of
/// sessions; calls for the same session are serialized.
pub struct Orchestrator {
    catalog: Arc<Catalog>,
    sessions: Arc<dyn SessionStore>,
    classifier: ResponseClassifier,
    config: InterviewConfig,
    locks: SessionLocks,
    symptoms: Option<SymptomWorkers>,
}

impl Orchestrator {
    pub fn new(
        catalog: Arc<Catalog>,
        sessions: Arc<dyn SessionStore>,
        classifier: ResponseClassifier,
        config: InterviewConfig,
    ) -> Self {
        Self {
            catalog,
            sessions,
            classifier,
            config,
            locks: SessionLocks::new(),
            symptoms: None,
        }
    }

    /// Feed every non-empty patient message to background symptom
    /// extraction.
    pub fn with_symptom_workers(mut self, workers: SymptomWorkers) -> Self {
        self.symptoms = Some(workers);
        self
    }

    /// Record `user_message` as the answer to the pending question (if any)
    /// and decide what happens next.
    ///
    /// An empty message with a question pending re-serves that question
    /// without changing state. Only persistence failures are errors;
    /// classifier failures degrade to the keyword heuristic.
    pub async fn get_next_step(
        &self,
        session_id: &str,
        patient_id: &str,
        user_message: &str,
    ) -> Result<NextStep, InterviewError> {
        let _guard = self.locks.acquire(session_id).await;
        let mut state = self.sessions.get_or_create(session_id, patient_id).await?;

        let message = user_message.trim();
        if !message.is_empty() {
            if let Some(workers) = &self.symptoms {
                workers.submit(session_id, message).await;
            }
            if state.current_question_id.is_some() {
                self.record_response(&mut state, message).await;
                state.touch();
                self.sessions.save(&state).await?;
            }
        }

        if let Some(step) = self.pending_step(&state) {
            debug!(session_id, question_id = ?step.question_id, "re-serving pending question");
            return Ok(step);
        }

        let step = self.decide(&mut state);
        state.touch();
        self.sessions.save(&state).await?;

        debug!(
            session_id,
            phase = %step.phase,
            action = ?step.action,
            question_id = ?step.question_id,
            "next step"
        );
        Ok(step)
    }

    /// Release per-session resources once the caller is done with a
    /// session. Waits for queued symptom extraction to finish.
    pub async fn retire(&self, session_id: &str) {
        self.locks.forget(session_id).await;
        if let Some(workers) = &self.symptoms {
            workers.retire(session_id).await;
        }
    }

    async fn record_response(&self, state: &mut InterviewState, message: &str) {
        let Some(question_id) = state.current_question_id.take() else {
            return;
        };
        state
            .responses
            .insert(question_id.clone(), message.to_string());

        let Some(question) = self.catalog.question(&question_id) else {
            warn!(
                session_id = %state.session_id,
                question_id = %question_id,
                "answer to a question missing from the catalog"
            );
            return;
        };

        // Only screening answers are classified. Open-ended answers feed
        // symptom extraction alone.
        let QuestionKind::Screening(item) = question.kind else {
            return;
        };

        let classification = self.classifier.classify(&item.text, message).await;
        let effect =
            skip_logic::apply_screening_response(&self.catalog, state, item, classification);

        info!(
            session_id = %state.session_id,
            item_id = %item.id,
            classification = %classification,
            skipped = effect.skipped.len(),
            "screening response recorded"
        );
        self.audit(
            state,
            AuditAction::ScreenRecorded,
            json!({
                "item_id": item.id,
                "classification": classification.as_str(),
                "positive_modules": effect.positive_modules,
            }),
        );
        if !effect.skipped.is_empty() {
            self.audit(
                state,
                AuditAction::ItemsSkipped,
                json!({ "item_id": item.id, "skipped": effect.skipped }),
            );
        }
    }

    /// The step for the still-unanswered question, if one is pending.
    fn pending_step(&self, state: &InterviewState) -> Option<NextStep> {
        let question_id = state.current_question_id.as_deref()?;
        let question = self.catalog.question(question_id)?;
        let step = NextStep::ask(state.phase, question.id, question.text);
        Some(match question.kind {
            QuestionKind::Module { module, index } => step.with_module(
                &module.id,
                ModuleProgress {
                    current: index + 1,
                    total: module.questions.len(),
                },
            ),
            _ => step,
        })
    }

    fn decide(&self, state: &mut InterviewState) -> NextStep {
        state.current_question_id = None;
        match state.phase {
            InterviewPhase::Overview => self.overview_step(state),
            InterviewPhase::Screening => self.screening_step(state),
            InterviewPhase::DeepDive => self.deep_dive_step(state),
            InterviewPhase::Timeline => self.timeline_step(state),
            InterviewPhase::Summary => {
                NextStep::complete(state.deployed_modules.clone(), state.positive_screens.clone())
            }
        }
    }

    fn overview_step(&self, state: &mut InterviewState) -> NextStep {
        if state.asked_questions.is_empty() {
            self.audit(state, AuditAction::SessionStarted, json!({}));
        }

        if let Some(q) = self
            .catalog
            .overview_questions()
            .iter()
            .find(|q| !state.is_asked(&q.id))
        {
            return ask(state, NextStep::ask(InterviewPhase::Overview, &q.id, &q.text));
        }

        state.priority_items = selector::seed_items(&self.catalog, &self.config);
        state.priority_modules = selector::linked_modules(&self.catalog, &state.priority_items);
        self.transition(state, InterviewPhase::Screening)
    }

    fn screening_step(&self, state: &mut InterviewState) -> NextStep {
        let next_item = selector::pending_items(&self.catalog, &self.config, state)
            .into_iter()
            .next();
        if let Some(item) = next_item {
            return ask(
                state,
                NextStep::ask(InterviewPhase::Screening, &item.id, &item.text),
            );
        }

        let modules =
            deployer::plan_deployment(&self.catalog, state, self.config.max_deep_dive_modules);
        if modules.is_empty() {
            state.priority_modules.clear();
            return self.transition(state, InterviewPhase::Summary);
        }
        state.priority_modules = modules;
        self.transition(state, InterviewPhase::DeepDive)
    }

    fn deep_dive_step(&self, state: &mut InterviewState) -> NextStep {
        loop {
            let module_id = match state.current_module.clone() {
                Some(id) => id,
                None => match deployer::next_module(state) {
                    Some(id) => {
                        state.current_module = Some(id.clone());
                        id
                    }
                    None => return self.transition(state, InterviewPhase::Timeline),
                },
            };

            match deployer::next_question(&self.catalog, state, &module_id) {
                DeployStep::Question { question, progress } => {
                    let step =
                        NextStep::ask(InterviewPhase::DeepDive, &question.id, &question.text)
                            .with_module(&module_id, progress);
                    return ask(state, step);
                }
                DeployStep::ModuleComplete => {
                    info!(session_id = %state.session_id, module_id = %module_id, "module deployed");
                    self.audit(
                        state,
                        AuditAction::ModuleDeployed,
                        json!({ "module_id": module_id }),
                    );
                }
            }
        }
    }

    fn timeline_step(&self, state: &mut InterviewState) -> NextStep {
        if let Some(q) = self
            .catalog
            .timeline_questions()
            .iter()
            .find(|q| !state.is_asked(&q.id))
        {
            return ask(state, NextStep::ask(InterviewPhase::Timeline, &q.id, &q.text));
        }
        self.transition(state, InterviewPhase::Summary)
    }

    fn transition(&self, state: &mut InterviewState, next: InterviewPhase) -> NextStep {
        let from = state.phase;
        if state.advance_to(next) {
            info!(session_id = %state.session_id, from = %from, to = %next, "phase transition");
            self.audit(
                state,
                AuditAction::PhaseTransition,
                json!({ "from": from.as_str(), "to": next.as_str() }),
            );
        }
        NextStep::transition(state.phase)
    }

    fn audit(&self, state: &InterviewState, action: AuditAction, details: serde_json::Value) {
        AuditEvent::new(action, &state.session_id, &state.patient_id)
            .with_details(details)
            .emit();
    }
}

/// Mark the step's question asked and pending.
fn ask(state: &mut InterviewState, step: NextStep) -> NextStep {
    if let Some(id) = &step.question_id {
        state.mark_asked(id);
        state.current_question_id = Some(id.clone());
    }
    step
}
