use serde::{Deserialize, Serialize};

use intake_core::models::category::Category;

/// Tunables for the interview flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    /// Categories whose leading items are screened first.
    pub seed_categories: Vec<Category>,
    pub items_per_seed_category: usize,
    /// Most screening items considered pending at once.
    pub pending_cap: usize,
    /// Most modules deployed for deep-dive.
    pub max_deep_dive_modules: usize,
    /// After the seed items, keep screening the rest of the catalog.
    /// Off by default: only seed items are asked.
    pub screen_full_catalog: bool,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            seed_categories: Category::SEED.to_vec(),
            items_per_seed_category: 2,
            pending_cap: 10,
            max_deep_dive_modules: 3,
            screen_full_catalog: false,
        }
    }
}
