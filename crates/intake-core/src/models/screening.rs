use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// A short yes/no question that decides whether a module is deployed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningItem {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub linked_modules: Vec<String>,
    /// A negative answer prunes every other item linked to the same modules.
    #[serde(default)]
    pub skip_module_if_negative: bool,
}

impl ScreeningItem {
    pub fn links_any(&self, modules: &[String]) -> bool {
        self.linked_modules.iter().any(|m| modules.contains(m))
    }
}

/// Three-way outcome of classifying a free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Classification {
    Positive,
    Negative,
    Ambiguous,
}

impl Classification {
    /// The screening score recorded for this outcome.
    pub fn score(&self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => 0.0,
            Self::Ambiguous => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Ambiguous => "AMBIGUOUS",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
