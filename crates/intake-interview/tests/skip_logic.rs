mod common;

use intake_core::models::interview::{InterviewPhase, InterviewState};
use intake_core::models::screening::Classification;
use intake_core::models::step::StepAction;
use intake_interview::InterviewConfig;
use intake_interview::deployer::{self, DeployStep};
use intake_interview::selector;
use intake_interview::skip_logic::apply_screening_response;

use common::{Offline, orchestrator, risk_catalog};

#[tokio::test]
async fn denied_risk_item_skips_every_other_mdd_item() {
    let (orch, store) = orchestrator(risk_catalog(), Offline);

    orch.get_next_step("s1", "p1", "").await.unwrap();
    orch.get_next_step("s1", "p1", "Work stress").await.unwrap();
    let step = orch.get_next_step("s1", "p1", "").await.unwrap();
    assert_eq!(step.question_id.as_deref(), Some("RISK_01"));

    let step = orch.get_next_step("s1", "p1", "no").await.unwrap();

    // The MDD items are never offered; the anxiety item is next.
    assert_eq!(step.question_id.as_deref(), Some("ANX_01"));

    let state = store.snapshot("s1").await.unwrap();
    assert_eq!(state.skipped_items, vec!["MDD_02", "MDD_03"]);
    assert_eq!(state.screening_scores["RISK_01"], 0.0);
    assert_eq!(state.negative_screens, vec!["MDD"]);
    for id in &state.skipped_items {
        assert!(!state.asked_questions.contains(id));
    }

    let step = orch.get_next_step("s1", "p1", "yes").await.unwrap();
    assert_eq!(step.action, StepAction::Transition);
    assert_eq!(step.phase, InterviewPhase::DeepDive);

    let state = store.snapshot("s1").await.unwrap();
    assert_eq!(state.priority_modules, vec!["GAD"]);
}

#[test]
fn skipping_is_idempotent_and_never_touches_asked_items() {
    let catalog = risk_catalog();
    let risk = catalog.screening_item("RISK_01").unwrap();
    let mut state = InterviewState::new("s1", "p1");
    state.mark_asked("MDD_02");

    let first = apply_screening_response(&catalog, &mut state, risk, Classification::Negative);
    let second = apply_screening_response(&catalog, &mut state, risk, Classification::Negative);

    assert_eq!(first.skipped, vec!["MDD_03"]);
    assert!(second.skipped.is_empty());
    assert_eq!(state.skipped_items, vec!["MDD_03"]);
}

#[test]
fn negative_without_skip_flag_skips_nothing() {
    let catalog = risk_catalog();
    let item = catalog.screening_item("MDD_02").unwrap();
    let mut state = InterviewState::new("s1", "p1");

    let effect = apply_screening_response(&catalog, &mut state, item, Classification::Negative);

    assert!(effect.skipped.is_empty());
    assert!(state.skipped_items.is_empty());
    assert_eq!(state.screening_scores["MDD_02"], 0.0);
}

#[test]
fn positive_screens_are_distinct() {
    let catalog = risk_catalog();
    let mut state = InterviewState::new("s1", "p1");

    for id in ["RISK_01", "MDD_02", "MDD_03"] {
        let item = catalog.screening_item(id).unwrap();
        apply_screening_response(&catalog, &mut state, item, Classification::Positive);
    }

    assert_eq!(state.positive_screens, vec!["MDD"]);
    assert_eq!(state.screening_scores["MDD_03"], 1.0);
}

#[test]
fn seed_items_take_two_per_seed_category() {
    let catalog = risk_catalog();
    let seeds = selector::seed_items(&catalog, &InterviewConfig::default());
    assert_eq!(seeds, vec!["RISK_01", "MDD_02", "ANX_01"]);
}

#[test]
fn screening_serves_only_seed_items_by_default() {
    let catalog = risk_catalog();
    let config = InterviewConfig::default();
    let mut state = InterviewState::new("s1", "p1");
    state.priority_items = selector::seed_items(&catalog, &config);

    let ids: Vec<&str> = selector::pending_items(&catalog, &config, &state)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["RISK_01", "MDD_02", "ANX_01"]);

    for id in ["RISK_01", "MDD_02", "ANX_01"] {
        state.mark_asked(id);
    }
    assert!(selector::pending_items(&catalog, &config, &state).is_empty());
}

#[test]
fn pending_items_respect_the_cap_and_full_catalog_mode() {
    let catalog = risk_catalog();
    let mut state = InterviewState::new("s1", "p1");
    state.priority_items = vec!["ANX_01".to_string()];

    let mut config = InterviewConfig {
        pending_cap: 2,
        screen_full_catalog: true,
        ..InterviewConfig::default()
    };
    let ids: Vec<&str> = selector::pending_items(&catalog, &config, &state)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["ANX_01", "RISK_01"]);

    config.screen_full_catalog = false;
    let ids: Vec<&str> = selector::pending_items(&catalog, &config, &state)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["ANX_01"]);
}

#[test]
fn deployment_orders_by_weight_and_caps_at_three() {
    let catalog = intake_catalog::Catalog::standard().unwrap();
    let mut state = InterviewState::new("s1", "p1");
    for module in ["SUD", "GAD", "OCD", "PSYCHOSIS", "MDD", "PTSD"] {
        state.add_positive_screen(module);
    }
    state.add_positive_screen("GAD");

    let plan = deployer::plan_deployment(&catalog, &state, 3);
    assert_eq!(plan, vec!["MDD", "PSYCHOSIS", "GAD"]);
}

#[test]
fn deployment_keeps_discovery_order_on_equal_weights() {
    let catalog = intake_catalog::Catalog::standard().unwrap();
    let mut state = InterviewState::new("s1", "p1");
    // PANIC and OCD both weigh 0.7.
    state.add_positive_screen("OCD");
    state.add_positive_screen("PANIC");

    let plan = deployer::plan_deployment(&catalog, &state, 3);
    assert_eq!(plan, vec!["OCD", "PANIC"]);
}

#[test]
fn deployer_advances_unconditionally_then_completes() {
    let catalog = risk_catalog();
    let mut state = InterviewState::new("s1", "p1");
    state.current_module = Some("GAD".to_string());

    match deployer::next_question(&catalog, &mut state, "GAD") {
        DeployStep::Question { question, progress } => {
            assert_eq!(question.id, "GAD_Q1");
            assert_eq!((progress.current, progress.total), (1, 1));
        }
        DeployStep::ModuleComplete => panic!("expected a question"),
    }
    assert_eq!(state.module_index("GAD"), 1);

    assert_eq!(
        deployer::next_question(&catalog, &mut state, "GAD"),
        DeployStep::ModuleComplete
    );
    assert!(state.is_deployed("GAD"));
    assert!(state.current_module.is_none());
}

#[test]
fn unknown_module_completes_without_questions() {
    let catalog = risk_catalog();
    let mut state = InterviewState::new("s1", "p1");

    assert_eq!(
        deployer::next_question(&catalog, &mut state, "NOPE"),
        DeployStep::ModuleComplete
    );
    assert!(state.is_deployed("NOPE"));
}
