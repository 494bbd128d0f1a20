use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

pub struct PsychoticPack;

impl CategoryPack for PsychoticPack {
    fn category(&self) -> Category {
        Category::Psychotic
    }

    fn keywords(&self) -> &[&'static str] {
        &[
            "hallucinat", "voices", "delusion", "paranoi", "disorganized", "psychos",
            "persecut",
        ]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "PSY_01",
                    "Have you heard voices or seen things that other people could not?",
                    Category::Psychotic,
                    &["PSYCHOSIS"],
                    true,
                ),
                item(
                    "PSY_02",
                    "Have you felt that people were plotting against you or trying to harm you?",
                    Category::Psychotic,
                    &["PSYCHOSIS"],
                    false,
                ),
            ]
        });
        &ITEMS
    }

    fn modules(&self) -> &[Module] {
        static MODULES: LazyLock<Vec<Module>> = LazyLock::new(|| {
            vec![module(
                "PSYCHOSIS",
                "Psychotic Symptoms",
                Category::Psychotic,
                0.95,
                &[
                    "What do the voices or visions tell you or show you?",
                    "How certain are you about these beliefs?",
                    "Have others noticed changes in how you speak or behave?",
                    "How long have these experiences been going on?",
                ],
            )]
        });
        &MODULES
    }

    fn disorders(&self) -> &[DisorderDefinition] {
        static DISORDERS: LazyLock<Vec<DisorderDefinition>> = LazyLock::new(|| {
            vec![disorder(
                "SCZ",
                "Schizophrenia",
                Category::Psychotic,
                &[
                    ("A1", "Delusions"),
                    ("A2", "Hallucinations"),
                    ("A3", "Disorganized speech"),
                    ("A4", "Grossly disorganized or catatonic behavior"),
                    ("A5", "Negative symptoms such as diminished emotional expression"),
                ],
                Some(2),
                core(&["hallucinat", "voices", "delusion", "paranoi", "disorganized"], 1),
            )]
        });
        &DISORDERS
    }
}
