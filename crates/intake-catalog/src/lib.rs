//! intake-catalog
//!
//! Screening and diagnostic reference data. Pure data, no AWS dependency.
//! Each category pack contributes its screening items, deep-dive modules,
//! disorder definitions, and symptom keywords; [`Catalog`] validates the
//! combined set once at startup.

pub mod catalog;
pub mod error;
pub mod packs;
pub mod questions;

pub use catalog::{Catalog, CatalogData, QuestionKind, QuestionRef};

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::Module;
use intake_core::models::screening::ScreeningItem;

/// Trait implemented by each diagnostic category's reference data.
pub trait CategoryPack: Send + Sync {
    fn category(&self) -> Category;

    /// Lower-case stems. A symptom whose name contains one of these counts
    /// toward this category in the category screen.
    fn keywords(&self) -> &[&'static str];

    /// Screening items in the order they should be asked.
    fn screening_items(&self) -> &[ScreeningItem];

    fn modules(&self) -> &[Module];

    fn disorders(&self) -> &[DisorderDefinition];
}

/// Return all registered category packs.
pub fn all_packs() -> Vec<Box<dyn CategoryPack>> {
    vec![
        Box::new(packs::mood::MoodPack),
        Box::new(packs::anxiety::AnxietyPack),
        Box::new(packs::trauma::TraumaPack),
        Box::new(packs::substance::SubstancePack),
        Box::new(packs::psychotic::PsychoticPack),
        Box::new(packs::obsessive_compulsive::ObsessiveCompulsivePack),
    ]
}

/// Look up a pack by category.
pub fn get_pack(category: Category) -> Option<Box<dyn CategoryPack>> {
    all_packs().into_iter().find(|p| p.category() == category)
}
