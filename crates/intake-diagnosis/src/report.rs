//! Report synthesis: ranking, primary selection, narrative, and follow-up
//! recommendations.

use serde::Serialize;
use tera::{Context, Tera};
use tracing::warn;
use uuid::Uuid;

use intake_core::models::diagnosis::{
    CategoryScreen, DiagnosisOutcome, DiagnosisReport, DiagnosisResult,
};
use intake_core::models::recommendation::Recommendation;

use crate::error::DiagnosisError;

const TEMPLATE_NAME: &str = "diagnosis_report";

/// Narrative template, rendered over the assembled report.
pub const REPORT_TEMPLATE: &str = "\
{% if primary -%}
Primary impression: {{ primary.disorder_name }} ({{ primary.severity }}), \
{{ primary.met_count }} of {{ primary.total_criteria }} criteria met \
(at least {{ primary.required_count }} required).
{% for d in differentials -%}
Differential: {{ d.disorder_name }} ({{ d.severity }}), \
{{ d.met_count }} of {{ d.total_criteria }} criteria met.
{% endfor -%}
{% else -%}
No diagnostic criteria were met based on the information gathered. \
A clinician should review the interview before drawing conclusions.
{% endif -%}
{% for id in not_found -%}
Not evaluated: {{ id }} is not in the disorder catalog.
{% endfor -%}
Screened categories: {{ categories | join(sep=\", \") }}.
{% if recommendations -%}
Recommendations:
{% for r in recommendations -%}
- {{ r.title }}: {{ r.description }}
{% endfor -%}
{% endif -%}
";

#[derive(Serialize)]
struct ReportView<'a> {
    primary: Option<ResultView<'a>>,
    differentials: Vec<ResultView<'a>>,
    not_found: &'a [String],
    categories: Vec<&'static str>,
    recommendations: &'a [Recommendation],
}

#[derive(Serialize)]
struct ResultView<'a> {
    disorder_name: &'a str,
    severity: &'static str,
    met_count: usize,
    required_count: usize,
    total_criteria: usize,
}

impl<'a> From<&'a DiagnosisResult> for ResultView<'a> {
    fn from(r: &'a DiagnosisResult) -> Self {
        Self {
            disorder_name: &r.disorder_name,
            severity: r.severity.as_str(),
            met_count: r.met_count,
            required_count: r.required_count,
            total_criteria: r.total_criteria,
        }
    }
}

/// Assemble the report from per-disorder outcomes.
///
/// Confirmed diagnoses are ranked by confidence, ties keeping evaluation
/// order; the first is primary and the rest are differentials. Unconfirmed
/// results follow in evaluation order. With nothing confirmed the report
/// carries the generic no-conditions narrative and recommendations.
pub fn synthesize(
    categories: CategoryScreen,
    candidates: Vec<String>,
    outcomes: Vec<DiagnosisOutcome>,
) -> DiagnosisReport {
    let mut confirmed: Vec<DiagnosisResult> = Vec::new();
    let mut unconfirmed: Vec<DiagnosisResult> = Vec::new();
    let mut not_found: Vec<String> = Vec::new();

    for outcome in outcomes {
        match outcome {
            DiagnosisOutcome::Evaluated(mut result) => {
                result.is_primary = false;
                if result.diagnosis_met {
                    confirmed.push(result);
                } else {
                    unconfirmed.push(result);
                }
            }
            DiagnosisOutcome::NotFound { disorder_id } => not_found.push(disorder_id),
        }
    }

    confirmed.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    if let Some(first) = confirmed.first_mut() {
        first.is_primary = true;
    }

    let primary = confirmed.first().cloned();
    let differentials: Vec<DiagnosisResult> = confirmed.iter().skip(1).cloned().collect();
    let recommendations = recommendations(primary.as_ref(), &differentials);
    let conditions_met = primary.is_some();

    let mut diagnoses = confirmed;
    diagnoses.extend(unconfirmed);

    let mut report = DiagnosisReport {
        id: Uuid::new_v4(),
        generated_at: jiff::Timestamp::now(),
        categories,
        candidates,
        diagnoses,
        primary,
        differentials,
        not_found,
        conditions_met,
        report: String::new(),
        recommendations,
    };

    report.report = render_report(&report).unwrap_or_else(|e| {
        warn!(error = %e, "report template failed, using plain summary");
        plain_summary(report.primary.as_ref())
    });
    report
}

/// Render the narrative for an assembled report.
pub fn render_report(report: &DiagnosisReport) -> Result<String, DiagnosisError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(|e| DiagnosisError::TemplateParse(e.to_string()))?;

    let view = ReportView {
        primary: report.primary.as_ref().map(ResultView::from),
        differentials: report.differentials.iter().map(ResultView::from).collect(),
        not_found: &report.not_found,
        categories: report.categories.categories.iter().map(|c| c.label()).collect(),
        recommendations: &report.recommendations,
    };
    let context = Context::from_value(serde_json::to_value(&view)?)
        .map_err(|e| DiagnosisError::TemplateRender(e.to_string()))?;

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

fn plain_summary(primary: Option<&DiagnosisResult>) -> String {
    match primary {
        Some(p) => format!("Primary impression: {} ({}).", p.disorder_name, p.severity.as_str()),
        None => "No diagnostic criteria were met based on the information gathered.".to_string(),
    }
}

/// Follow-ups for the confirmed diagnoses, or the generic set when there
/// are none.
pub fn recommendations(
    primary: Option<&DiagnosisResult>,
    differentials: &[DiagnosisResult],
) -> Vec<Recommendation> {
    let Some(primary) = primary else {
        return generic_recommendations();
    };

    let mut recs = vec![Recommendation::new(
        format!("Clinical assessment for {}", primary.disorder_name),
        format!(
            "Confirm the provisional {} impression with a structured clinical interview \
             and discuss treatment options.",
            primary.disorder_name
        ),
    )];
    for d in differentials {
        recs.push(Recommendation::new(
            format!("Review differential: {}", d.disorder_name),
            format!(
                "{} of {} criteria were met. Clarify whether these symptoms are better \
                 explained by the primary impression.",
                d.met_count, d.total_criteria
            ),
        ));
    }
    recs.push(Recommendation::new(
        "Safety check",
        "Ask directly about thoughts of self-harm at the next contact.",
    ));
    recs
}

pub fn generic_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Continue monitoring",
            "Track mood, sleep, and stress over the coming weeks and note any changes.",
        ),
        Recommendation::new(
            "Follow-up conversation",
            "Schedule a follow-up if symptoms persist, worsen, or begin to affect daily life.",
        ),
        Recommendation::new(
            "Self-care",
            "Maintain regular sleep, physical activity, and social contact.",
        ),
    ]
}
