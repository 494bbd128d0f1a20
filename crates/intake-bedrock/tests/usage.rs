use intake_bedrock::usage::{TokenCount, cost_usd, rate_for};

#[test]
fn model_families_resolve_to_rates() {
    assert!(rate_for("us.anthropic.claude-sonnet-4-20250514-v1:0").is_some());
    assert!(rate_for("us.anthropic.claude-haiku-4-5-20251001-v1:0").is_some());
    assert!(rate_for("amazon.titan-text-lite-v1").is_none());
}

#[test]
fn cost_scales_with_tokens() {
    let tokens = TokenCount {
        input: 1_000_000,
        output: 100_000,
    };
    assert_eq!(tokens.total(), 1_100_000);
    assert!((cost_usd("claude-sonnet-4", tokens) - 4.5).abs() < 1e-9);
}

#[test]
fn unknown_models_cost_nothing() {
    let tokens = TokenCount {
        input: 500,
        output: 500,
    };
    assert_eq!(cost_usd("amazon.titan-text-lite-v1", tokens), 0.0);
}
