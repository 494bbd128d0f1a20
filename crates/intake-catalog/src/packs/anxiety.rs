use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

/// Generalized anxiety and panic presentations.
pub struct AnxietyPack;

impl CategoryPack for AnxietyPack {
    fn category(&self) -> Category {
        Category::Anxiety
    }

    fn keywords(&self) -> &[&'static str] {
        &[
            "anxi", "worry", "worri", "nervous", "on edge", "panic", "fear", "restless",
            "tension", "palpitation", "racing heart", "irritab",
        ]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "ANX_01",
                    "Over the past two weeks, have you often felt nervous, anxious, or on edge?",
                    Category::Anxiety,
                    &["GAD"],
                    false,
                ),
                item(
                    "ANX_02",
                    "Have you found it hard to stop or control your worrying?",
                    Category::Anxiety,
                    &["GAD"],
                    true,
                ),
                item(
                    "ANX_03",
                    "Have you had sudden episodes of intense fear with a racing heart, \
                     shortness of breath, or shaking?",
                    Category::Anxiety,
                    &["PANIC"],
                    true,
                ),
            ]
        });
        &ITEMS
    }

    fn modules(&self) -> &[Module] {
        static MODULES: LazyLock<Vec<Module>> = LazyLock::new(|| {
            vec![
                module(
                    "GAD",
                    "Generalized Anxiety",
                    Category::Anxiety,
                    0.9,
                    &[
                        "What kinds of things do you worry about most?",
                        "Do you feel restless or keyed up much of the time?",
                        "Do you notice muscle tension, headaches, or stomach upset?",
                        "Does worry keep you from falling or staying asleep?",
                        "Do you get irritable more easily than you used to?",
                    ],
                ),
                module(
                    "PANIC",
                    "Panic Attacks",
                    Category::Anxiety,
                    0.7,
                    &[
                        "How often do these episodes happen?",
                        "Do they come on without warning?",
                        "Do you worry about having another one, or avoid places because of them?",
                    ],
                ),
            ]
        });
        &MODULES
    }

    fn disorders(&self) -> &[DisorderDefinition] {
        static DISORDERS: LazyLock<Vec<DisorderDefinition>> = LazyLock::new(|| {
            vec![
                disorder(
                    "GAD",
                    "Generalized Anxiety Disorder",
                    Category::Anxiety,
                    &[
                        ("A", "Excessive anxiety and worry more days than not"),
                        ("B", "Difficulty controlling the worry"),
                        ("C1", "Restlessness or feeling keyed up or on edge"),
                        ("C2", "Being easily fatigued"),
                        ("C3", "Difficulty concentrating or mind going blank"),
                        ("C4", "Irritability"),
                        ("C5", "Muscle tension"),
                        ("C6", "Sleep disturbance"),
                    ],
                    None,
                    core(&["anxi", "worry", "worri", "nervous", "on edge"], 1),
                ),
                disorder(
                    "PANIC",
                    "Panic Disorder",
                    Category::Anxiety,
                    &[
                        ("A", "Recurrent unexpected panic attacks"),
                        ("B1", "Persistent concern about additional attacks"),
                        ("B2", "Avoidance or other maladaptive change in behavior"),
                        ("C1", "Palpitations, pounding or racing heart"),
                        ("C2", "Shortness of breath or smothering"),
                    ],
                    Some(3),
                    core(&["panic", "palpitation", "racing heart", "fear"], 1),
                ),
            ]
        });
        &DISORDERS
    }
}
