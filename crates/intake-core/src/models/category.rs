use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A diagnostic category. Screening items, modules, and disorders all
/// belong to exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "mood_disorders")]
    Mood,
    #[serde(rename = "anxiety_disorders")]
    Anxiety,
    #[serde(rename = "trauma_disorders")]
    Trauma,
    #[serde(rename = "substance_disorders")]
    Substance,
    #[serde(rename = "psychotic_disorders")]
    Psychotic,
    #[serde(rename = "obsessive_compulsive_disorders")]
    ObsessiveCompulsive,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mood,
        Category::Anxiety,
        Category::Trauma,
        Category::Substance,
        Category::Psychotic,
        Category::ObsessiveCompulsive,
    ];

    /// The high-yield categories screened first in every interview.
    pub const SEED: [Category; 4] = [
        Category::Mood,
        Category::Anxiety,
        Category::Trauma,
        Category::Substance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mood => "mood_disorders",
            Self::Anxiety => "anxiety_disorders",
            Self::Trauma => "trauma_disorders",
            Self::Substance => "substance_disorders",
            Self::Psychotic => "psychotic_disorders",
            Self::ObsessiveCompulsive => "obsessive_compulsive_disorders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Anxiety => "Anxiety",
            Self::Trauma => "Trauma and stressor-related",
            Self::Substance => "Substance use",
            Self::Psychotic => "Psychotic",
            Self::ObsessiveCompulsive => "Obsessive-compulsive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Accepts both the full name (`mood_disorders`) and the short
    /// screening form (`mood`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let short = normalized.strip_suffix("_disorders").unwrap_or(&normalized);
        match short {
            "mood" => Ok(Self::Mood),
            "anxiety" => Ok(Self::Anxiety),
            "trauma" => Ok(Self::Trauma),
            "substance" => Ok(Self::Substance),
            "psychotic" => Ok(Self::Psychotic),
            "obsessive_compulsive" | "ocd" => Ok(Self::ObsessiveCompulsive),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}
