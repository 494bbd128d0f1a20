use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

pub struct SubstancePack;

impl CategoryPack for SubstancePack {
    fn category(&self) -> Category {
        Category::Substance
    }

    fn keywords(&self) -> &[&'static str] {
        &[
            "alcohol", "drink", "drug", "substance", "craving", "withdrawal", "intoxica",
            "cannabis", "opioid", "stimulant", "tolerance",
        ]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "SUB_01",
                    "In the past year, have you used alcohol or drugs more than you meant to?",
                    Category::Substance,
                    &["SUD"],
                    true,
                ),
                item(
                    "SUB_02",
                    "Have you tried to cut down on drinking or drug use and found you couldn't?",
                    Category::Substance,
                    &["SUD"],
                    false,
                ),
            ]
        });
        &ITEMS
    }

    fn modules(&self) -> &[Module] {
        static MODULES: LazyLock<Vec<Module>> = LazyLock::new(|| {
            vec![module(
                "SUD",
                "Substance Use",
                Category::Substance,
                0.75,
                &[
                    "Which substances do you use, and how often?",
                    "Do you need more than before to get the same effect?",
                    "Do you feel sick, shaky, or anxious when you stop?",
                    "Has your use caused problems at work, school, or home?",
                    "Do you have strong cravings?",
                ],
            )]
        });
        &MODULES
    }

    fn disorders(&self) -> &[DisorderDefinition] {
        static DISORDERS: LazyLock<Vec<DisorderDefinition>> = LazyLock::new(|| {
            vec![
                disorder(
                    "AUD",
                    "Alcohol Use Disorder",
                    Category::Substance,
                    &[
                        ("1", "Alcohol taken in larger amounts or longer than intended"),
                        ("2", "Persistent desire or unsuccessful efforts to cut down"),
                        ("3", "Craving or strong urge to drink"),
                        ("4", "Recurrent drinking resulting in failure at work, school, or home"),
                        ("5", "Tolerance: needing more for the same effect"),
                        ("6", "Withdrawal symptoms when stopping"),
                    ],
                    Some(2),
                    core(&["alcohol", "drink"], 1),
                ),
                disorder(
                    "SUD",
                    "Substance Use Disorder",
                    Category::Substance,
                    &[
                        ("1", "Substance taken in larger amounts or longer than intended"),
                        ("2", "Persistent desire or unsuccessful efforts to cut down"),
                        ("3", "Craving or strong urge to use"),
                        ("4", "Tolerance: needing more for the same effect"),
                        ("5", "Withdrawal symptoms when stopping"),
                    ],
                    Some(2),
                    core(&["drug", "substance", "cannabis", "opioid", "stimulant"], 1),
                ),
            ]
        });
        &DISORDERS
    }
}
