use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

pub struct TraumaPack;

impl CategoryPack for TraumaPack {
    fn category(&self) -> Category {
        Category::Trauma
    }

    fn keywords(&self) -> &[&'static str] {
        &[
            "trauma", "flashback", "nightmare", "intrusive memor", "hypervigil", "startle",
            "avoid", "numb",
        ]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "TRAUMA_01",
                    "Have you ever experienced or witnessed an event that was life-threatening \
                     or deeply frightening?",
                    Category::Trauma,
                    &["PTSD"],
                    true,
                ),
                item(
                    "TRAUMA_02",
                    "Do you have nightmares, flashbacks, or unwanted memories of a painful event?",
                    Category::Trauma,
                    &["PTSD"],
                    false,
                ),
            ]
        });
        &ITEMS
    }

    fn modules(&self) -> &[Module] {
        static MODULES: LazyLock<Vec<Module>> = LazyLock::new(|| {
            vec![module(
                "PTSD",
                "Posttraumatic Stress",
                Category::Trauma,
                0.85,
                &[
                    "Without going into detail you don't want to share, when did the event happen?",
                    "Do memories of it come back when you don't want them to?",
                    "Do you avoid people, places, or conversations that remind you of it?",
                    "Do you feel constantly on guard or easily startled?",
                    "Have you felt emotionally numb or detached from others since then?",
                ],
            )]
        });
        &MODULES
    }

    fn disorders(&self) -> &[DisorderDefinition] {
        static DISORDERS: LazyLock<Vec<DisorderDefinition>> = LazyLock::new(|| {
            vec![disorder(
                "PTSD",
                "Posttraumatic Stress Disorder",
                Category::Trauma,
                &[
                    ("A", "Exposure to actual or threatened death, serious injury, or violence"),
                    ("B1", "Intrusive distressing memories of the traumatic event"),
                    ("B2", "Recurrent distressing dreams or nightmares"),
                    ("B3", "Flashbacks or dissociative reactions"),
                    ("C", "Persistent avoidance of trauma reminders"),
                    ("D", "Negative alterations in mood or feeling emotionally numb"),
                    ("E1", "Hypervigilance"),
                    ("E2", "Exaggerated startle response"),
                ],
                Some(4),
                core(&["trauma", "flashback", "nightmare", "intrusive memor"], 1),
            )]
        });
        &DISORDERS
    }
}
