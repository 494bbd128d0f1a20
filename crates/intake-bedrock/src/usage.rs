//! Token accounting for classifier calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}

impl TokenCount {
    pub fn total(&self) -> u64 {
        self.input + self.output
    }

    pub fn from_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> Self {
        Self {
            input: usage.input_tokens.max(0) as u64,
            output: usage.output_tokens.max(0) as u64,
        }
    }
}

/// USD per million tokens, input then output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub input: f64,
    pub output: f64,
}

/// Approximate on-demand rates, matched by model family substring.
const RATES: &[(&str, Rate)] = &[
    ("claude-opus-4", Rate { input: 15.0, output: 75.0 }),
    ("claude-sonnet-4", Rate { input: 3.0, output: 15.0 }),
    ("claude-haiku", Rate { input: 0.80, output: 4.0 }),
];

pub fn rate_for(model_id: &str) -> Option<Rate> {
    RATES
        .iter()
        .find(|(family, _)| model_id.contains(family))
        .map(|(_, rate)| *rate)
}

/// Estimated cost of one call, or 0 for models without a known rate.
pub fn cost_usd(model_id: &str, tokens: TokenCount) -> f64 {
    rate_for(model_id).map_or(0.0, |rate| {
        (tokens.input as f64 * rate.input + tokens.output as f64 * rate.output) / 1_000_000.0
    })
}
