//! Category screening: which diagnostic areas the symptom set points at.

use intake_core::models::category::Category;
use intake_core::models::diagnosis::{CategoryScore, CategoryScreen};
use intake_core::models::symptom::Symptom;

use crate::config::DiagnosisConfig;

/// Confidence reported when the screen falls back to the default categories.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Score categories by keyword hits in symptom names.
///
/// Each symptom adds its severity to every category with a keyword that
/// occurs in the (lower-cased) name. Categories are ranked by score,
/// keeping `keywords` order among ties, and the top `top_categories` are
/// returned. When no symptom matches, the screen falls back to
/// `fallback_categories` with [`DEFAULT_CONFIDENCE`].
pub fn screen_categories(
    symptoms: &[Symptom],
    keywords: &[(Category, Vec<String>)],
    config: &DiagnosisConfig,
) -> CategoryScreen {
    let mut scores: Vec<CategoryScore> = Vec::new();

    for symptom in symptoms {
        let name = symptom.name.to_lowercase();
        for (category, words) in keywords {
            if !words.iter().any(|w| name.contains(w.as_str())) {
                continue;
            }
            match scores.iter_mut().find(|s| s.category == *category) {
                Some(entry) => entry.score += symptom.severity,
                None => scores.push(CategoryScore {
                    category: *category,
                    score: symptom.severity,
                }),
            }
        }
    }

    if scores.is_empty() {
        return CategoryScreen {
            categories: config.fallback_categories.clone(),
            scores,
            confidence: DEFAULT_CONFIDENCE,
        };
    }

    // Ties keep catalog order, not symptom order.
    scores.sort_by_key(|s| keywords.iter().position(|(c, _)| *c == s.category));
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    let total: f64 = scores.iter().map(|s| s.score).sum();
    let confidence = if total > 0.0 {
        scores[0].score / total
    } else {
        DEFAULT_CONFIDENCE
    };

    CategoryScreen {
        categories: scores
            .iter()
            .take(config.top_categories)
            .map(|s| s.category)
            .collect(),
        scores,
        confidence,
    }
}
