use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// A deep-dive module: an ordered question list for one diagnostic area.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Higher weights deploy first.
    pub priority_weight: f64,
    pub questions: Vec<Question>,
}

/// A question with a stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
