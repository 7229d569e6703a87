use crate::core::engine::round_score;
use crate::domain::model::{CriterionWeights, Recommendation};
use crate::utils::error::{AdvisorError, Result};
use serde::Serialize;

pub const DEFAULT_EXPORT_FILENAME: &str = "hasil_rekomendasi.csv";

#[derive(Debug, Serialize)]
struct ScoreRow<'a> {
    #[serde(rename = "Field")]
    field: &'a str,
    #[serde(rename = "Score")]
    score: String,
}

/// `Field,Score` rows in ranking order, scores at tie-break precision.
pub fn scores_to_csv(recommendation: &Recommendation) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in &recommendation.ranking {
        writer.serialize(ScoreRow {
            field: entry.field.display_name(),
            score: format!("{:.4}", round_score(entry.score)),
        })?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| AdvisorError::IoError(e.into_error()))
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: String,
    pub student: Option<&'a str>,
    pub weights: &'a CriterionWeights,
    pub major: &'static str,
    pub minor: &'static str,
    pub minor_course: &'static str,
    pub all_tied: bool,
    pub ranking: Vec<ReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub field: &'static str,
    pub score: f64,
    pub interest: u8,
    pub grade: u8,
    pub career_fit: u8,
}

impl<'a> Report<'a> {
    pub fn new(
        recommendation: &Recommendation,
        weights: &'a CriterionWeights,
        student: Option<&'a str>,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            student,
            weights,
            major: recommendation.major.display_name(),
            minor: recommendation.minor.display_name(),
            minor_course: recommendation.minor_course.display_name(),
            all_tied: recommendation.all_tied,
            ranking: recommendation
                .ranking
                .iter()
                .map(|entry| ReportEntry {
                    field: entry.field.display_name(),
                    score: round_score(entry.score),
                    interest: entry.inputs.interest,
                    grade: entry.inputs.grade,
                    career_fit: entry.inputs.career_fit,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plain-text summary for terminal output.
pub fn render_text(recommendation: &Recommendation) -> String {
    let mut out = String::new();
    out.push_str(&format!("🎓 Major: {}\n", recommendation.major));
    out.push_str(&format!("📘 Minor: {}\n", recommendation.minor));
    out.push_str(&format!(
        "📚 Recommended minor course: {}\n",
        recommendation.minor_course
    ));
    if recommendation.all_tied {
        out.push_str(
            "⚠️ All scores, grades, career fit and interest are equal; major and minor were picked by field name\n",
        );
    }
    out.push_str("\n📊 Scores\n");
    for (position, entry) in recommendation.ranking.iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<24} {:.4}\n",
            position + 1,
            entry.field.display_name(),
            round_score(entry.score)
        ));
    }
    out
}

/// Expands a `{timestamp}` placeholder in an export filename.
pub fn resolve_filename(template: &str) -> String {
    template.replace(
        "{timestamp}",
        &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
    )
}
