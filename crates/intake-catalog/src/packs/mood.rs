use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

/// Depressive and bipolar presentations.
pub struct MoodPack;

impl CategoryPack for MoodPack {
    fn category(&self) -> Category {
        Category::Mood
    }

    fn keywords(&self) -> &[&'static str] {
        &[
            "depress", "sad", "hopeless", "low mood", "anhedonia", "interest", "worthless",
            "guilt", "suicid", "appetite", "insomnia", "hypersomnia", "fatigue", "energy",
            "mania", "manic", "elevated", "euphori", "grandios",
        ]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "MOOD_01",
                    "Over the past two weeks, have you often felt down, depressed, or hopeless?",
                    Category::Mood,
                    &["MDD"],
                    false,
                ),
                item(
                    "MOOD_02",
                    "Have you lost interest or pleasure in things you usually enjoy?",
                    Category::Mood,
                    &["MDD"],
                    true,
                ),
                item(
                    "MOOD_03",
                    "Have you had several days in a row of unusually high energy or elevated mood, \
                     needing much less sleep than usual?",
                    Category::Mood,
                    &["BIPOLAR"],
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
                    "MDD",
                    "Major Depressive Episode",
                    Category::Mood,
                    1.0,
                    &[
                        "How would you describe your mood most days?",
                        "Have your sleep patterns changed? Sleeping much more or much less?",
                        "Has your appetite or weight changed noticeably?",
                        "How is your energy level through the day?",
                        "Do you find it hard to concentrate or make decisions?",
                        "Do you often feel worthless or excessively guilty?",
                        "Have you had thoughts of death or of ending your life?",
                    ],
                ),
                module(
                    "BIPOLAR",
                    "Manic and Hypomanic Episodes",
                    Category::Mood,
                    0.8,
                    &[
                        "During those high periods, how many hours did you sleep?",
                        "Did your thoughts race or did others say you talked much faster?",
                        "Did you take risks you normally wouldn't, such as spending sprees?",
                        "How long did the longest of those periods last?",
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
                    "MDD",
                    "Major Depressive Disorder",
                    Category::Mood,
                    &[
                        ("A1", "Depressed mood most of the day, nearly every day"),
                        ("A2", "Markedly diminished interest or pleasure in activities"),
                        ("A3", "Significant weight loss or appetite change"),
                        ("A4", "Insomnia or hypersomnia nearly every day"),
                        ("A5", "Psychomotor agitation or retardation observable by others"),
                        ("A6", "Fatigue or loss of energy nearly every day"),
                        ("A7", "Feelings of worthlessness or excessive guilt"),
                        ("A8", "Diminished ability to think, concentrate, or decide"),
                        ("A9", "Recurrent thoughts of death or suicidal ideation"),
                    ],
                    Some(5),
                    core(&["depress", "sad", "hopeless", "low mood", "anhedonia", "interest"], 1),
                ),
                disorder(
                    "PDD",
                    "Persistent Depressive Disorder",
                    Category::Mood,
                    &[
                        ("A", "Depressed mood for most days over at least two years"),
                        ("B1", "Appetite: poor appetite or overeating"),
                        ("B2", "Insomnia or hypersomnia"),
                        ("B3", "Energy: low energy or fatigue"),
                        ("B4", "Self-esteem: low self-esteem"),
                        ("B5", "Concentration: poor concentration or difficulty making decisions"),
                        ("B6", "Hopelessness: feelings of hopelessness"),
                    ],
                    None,
                    core(&["depress", "hopeless", "chronic", "low mood"], 2),
                ),
                disorder(
                    "BIPOLAR_I",
                    "Bipolar I Disorder",
                    Category::Mood,
                    &[
                        ("A", "Elevated, expansive, or irritable mood with increased energy"),
                        ("B1", "Inflated self-esteem or grandiosity"),
                        ("B2", "Decreased need for sleep"),
                        ("B3", "Pressured speech, more talkative than usual"),
                        ("B4", "Racing thoughts or flight of ideas"),
                        ("B5", "Distractibility reported or observed"),
                        ("B6", "Increased goal-directed activity or agitation"),
                        ("B7", "Risky activities with painful consequences"),
                    ],
                    Some(4),
                    core(&["mania", "manic", "elevated", "euphori", "grandios"], 1),
                ),
            ]
        });
        &DISORDERS
    }
}
