use intake_catalog::error::CatalogError;
use intake_catalog::{Catalog, CatalogData, QuestionKind, all_packs, get_pack};
use intake_core::models::category::Category;
use intake_core::models::disorder::{CoreSymptoms, Criterion, DisorderDefinition};
use intake_core::models::module::{Module, Question};
use intake_core::models::screening::ScreeningItem;

fn item(id: &str, modules: &[&str]) -> ScreeningItem {
    ScreeningItem {
        id: id.to_string(),
        text: format!("{id}?"),
        category: Category::Mood,
        linked_modules: modules.iter().map(|m| m.to_string()).collect(),
        skip_module_if_negative: false,
    }
}

fn module(id: &str, questions: usize) -> Module {
    Module {
        id: id.to_string(),
        name: id.to_string(),
        category: Category::Mood,
        priority_weight: 1.0,
        questions: (1..=questions)
            .map(|i| Question::new(format!("{id}_Q{i}"), format!("{id} question {i}")))
            .collect(),
    }
}

fn disorder(id: &str, criteria: usize, minimum: Option<usize>) -> DisorderDefinition {
    DisorderDefinition {
        disorder_id: id.to_string(),
        disorder_name: id.to_string(),
        category: Category::Mood,
        criteria: (0..criteria)
            .map(|i| Criterion::new(format!("{id}.{i}"), format!("criterion {i}")))
            .collect(),
        minimum_criteria_count: minimum,
        core_symptoms: None,
    }
}

fn small() -> CatalogData {
    CatalogData {
        overview: vec![Question::new("OV_1", "Overview?")],
        timeline: vec![Question::new("TL_1", "Timeline?")],
        screening_items: vec![item("S_1", &["M"])],
        modules: vec![module("M", 2)],
        disorders: vec![disorder("D", 3, None)],
        keywords: vec![(Category::Mood, vec!["Sad".to_string()])],
    }
}

#[test]
fn standard_catalog_is_valid() {
    let catalog = Catalog::standard().unwrap();

    assert_eq!(catalog.overview_questions().len(), 2);
    assert_eq!(catalog.timeline_questions().len(), 2);
    assert_eq!(catalog.screening_items().len(), 14);
    assert_eq!(catalog.category_keywords().len(), Category::ALL.len());
    for category in Category::ALL {
        assert!(catalog.items_in(category).count() >= 2, "{category}");
        assert!(catalog.disorders_in(category).count() >= 1, "{category}");
    }
    assert_eq!(catalog.module("MDD").unwrap().questions.len(), 7);
    assert_eq!(catalog.disorder("MDD").unwrap().required_count(), 5);
}

#[test]
fn packs_are_registered_once_per_category() {
    let packs = all_packs();
    let categories: Vec<Category> = packs.iter().map(|p| p.category()).collect();
    assert_eq!(categories, Category::ALL.to_vec());

    let anxiety = get_pack(Category::Anxiety).unwrap();
    assert!(anxiety.screening_items().iter().any(|i| i.id == "ANX_01"));
}

#[test]
fn questions_resolve_to_their_kind() {
    let catalog = Catalog::standard().unwrap();

    let overview = catalog.question("OVERVIEW_01").unwrap();
    assert!(matches!(overview.kind, QuestionKind::Overview));

    let timeline = catalog.question("TIMELINE_02").unwrap();
    assert!(matches!(timeline.kind, QuestionKind::Timeline));

    let screening = catalog.question("MOOD_02").unwrap();
    match screening.kind {
        QuestionKind::Screening(item) => assert_eq!(item.linked_modules, vec!["MDD"]),
        other => panic!("expected screening item, got {other:?}"),
    }

    let deep_dive = catalog.question("MDD_03").unwrap();
    match deep_dive.kind {
        QuestionKind::Module { module, index } => {
            assert_eq!(module.id, "MDD");
            assert_eq!(index, 2);
        }
        other => panic!("expected module question, got {other:?}"),
    }

    assert!(catalog.question("NOPE").is_none());
}

#[test]
fn keywords_are_lower_cased() {
    let catalog = Catalog::from_data(small()).unwrap();
    assert_eq!(catalog.category_keywords()[0].1, vec!["sad"]);
}

#[test]
fn ids_must_be_unique_across_question_kinds() {
    let mut data = small();
    data.screening_items.push(item("M_Q1", &["M"]));

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "M_Q1"));
}

#[test]
fn unknown_module_links_are_rejected() {
    let mut data = small();
    data.screening_items.push(item("S_2", &["M", "GHOST"]));

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownModule { ref item_id, ref module_id }
            if item_id == "S_2" && module_id == "GHOST"
    ));
}

#[test]
fn minimum_above_total_is_rejected() {
    let mut data = small();
    data.disorders.push(disorder("BAD", 2, Some(3)));

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MinimumExceedsCriteria { required: 3, total: 2, .. }
    ));
}

#[test]
fn disorders_need_criteria() {
    let mut data = small();
    data.disorders.push(disorder("EMPTY", 0, None));

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyCriteria(id) if id == "EMPTY"));
}

#[test]
fn core_threshold_must_be_reachable() {
    let mut data = small();
    let mut d = disorder("CORE", 2, None);
    d.core_symptoms = Some(CoreSymptoms {
        any_of: vec!["sad".to_string()],
        threshold: 2,
    });
    data.disorders.push(d);

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnreachableCoreThreshold { threshold: 2, keywords: 1, .. }
    ));
}

#[test]
fn priority_weights_must_be_finite() {
    let mut data = small();
    data.modules[0].priority_weight = f64::NAN;

    let err = Catalog::from_data(data).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPriorityWeight(id) if id == "M"));
}

#[test]
fn catalog_loads_from_json() {
    let json = serde_json::to_string(&small()).unwrap();
    let catalog = Catalog::from_json(&json).unwrap();

    assert_eq!(catalog.screening_item("S_1").unwrap().linked_modules, vec!["M"]);
    assert_eq!(catalog.disorder("D").unwrap().required_count(), 1);

    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(CatalogError::Serialization(_))
    ));
}
