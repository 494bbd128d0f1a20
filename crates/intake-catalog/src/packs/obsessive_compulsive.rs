use std::sync::LazyLock;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

use super::{core, disorder, item, module};
use crate::CategoryPack;

pub struct ObsessiveCompulsivePack;

impl CategoryPack for ObsessiveCompulsivePack {
    fn category(&self) -> Category {
        Category::ObsessiveCompulsive
    }

    fn keywords(&self) -> &[&'static str] {
        &["obsess", "compuls", "intrusive thought", "checking", "washing", "ritual"]
    }

    fn screening_items(&self) -> &[ScreeningItem] {
        static ITEMS: LazyLock<Vec<ScreeningItem>> = LazyLock::new(|| {
            vec![
                item(
                    "OBS_01",
                    "Do you have unwanted thoughts or images that keep coming back no matter \
                     how hard you try to push them away?",
                    Category::ObsessiveCompulsive,
                    &["OCD"],
                    true,
                ),
                item(
                    "OBS_02",
                    "Do you feel driven to repeat actions such as checking, washing, or counting?",
                    Category::ObsessiveCompulsive,
                    &["OCD"],
                    false,
                ),
            ]
        });
        &ITEMS
    }

    fn modules(&self) -> &[Module] {
        static MODULES: LazyLock<Vec<Module>> = LazyLock::new(|| {
            vec![module(
                "OCD",
                "Obsessions and Compulsions",
                Category::ObsessiveCompulsive,
                0.7,
                &[
                    "What are the thoughts that keep coming back?",
                    "What do you do to make the thoughts or anxiety go away?",
                    "How much time each day do these thoughts or actions take?",
                ],
            )]
        });
        &MODULES
    }

    fn disorders(&self) -> &[DisorderDefinition] {
        static DISORDERS: LazyLock<Vec<DisorderDefinition>> = LazyLock::new(|| {
            vec![disorder(
                "OCD",
                "Obsessive-Compulsive Disorder",
                Category::ObsessiveCompulsive,
                &[
                    ("A1", "Obsessions: recurrent intrusive thoughts, urges, or images"),
                    ("A2", "Compulsions: repetitive behaviors or mental acts such as checking or washing"),
                    ("B", "Obsessions or compulsions are time-consuming, more than an hour a day"),
                    ("C", "Significant distress or impairment in functioning"),
                ],
                Some(2),
                core(&["obsess", "compuls", "intrusive thought", "checking", "washing"], 1),
            )]
        });
        &DISORDERS
    }
}
