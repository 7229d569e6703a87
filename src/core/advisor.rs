use crate::core::engine::RecommendationEngine;
use crate::core::export;
use crate::domain::model::Recommendation;
use crate::domain::ports::{InputSource, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub struct AdvisorOutcome {
    pub recommendation: Recommendation,
    pub export_path: Option<String>,
}

struct Export<'s> {
    storage: &'s dyn Storage,
    filename: String,
}

/// Runs one evaluation: read inputs, recommend, optionally export the scores.
pub struct Advisor<'s, I: InputSource> {
    source: I,
    engine: RecommendationEngine,
    export: Option<Export<'s>>,
}

impl<'s, I: InputSource> Advisor<'s, I> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            engine: RecommendationEngine::default(),
            export: None,
        }
    }

    /// Writes the `Field,Score` CSV through `storage` after each run.
    pub fn with_export(mut self, storage: &'s dyn Storage, filename: &str) -> Self {
        self.export = Some(Export {
            storage,
            filename: export::resolve_filename(filename),
        });
        self
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn source(&self) -> &I {
        &self.source
    }

    pub fn run(&self) -> Result<AdvisorOutcome> {
        match self.source.student_name() {
            Some(name) => tracing::info!("🎓 Evaluating fields for {}", name),
            None => tracing::info!("🎓 Evaluating fields"),
        }

        let inputs = self.source.field_inputs()?;
        inputs.validate()?;

        let recommendation = self.engine.recommend(&inputs);
        tracing::info!(
            "Major: {}, Minor: {}, Course: {}",
            recommendation.major,
            recommendation.minor,
            recommendation.minor_course
        );
        if recommendation.all_tied {
            tracing::warn!(
                "⚠️ All scores, grades, career fit and interest are equal; order fell back to field names"
            );
        }

        let export_path = match &self.export {
            Some(export) => {
                let data = export::scores_to_csv(&recommendation)?;
                let path = export.storage.write_file(&export.filename, &data)?;
                tracing::info!("📥 Scores exported to: {}", path);
                Some(path)
            }
            None => None,
        };

        Ok(AdvisorOutcome {
            recommendation,
            export_path,
        })
    }
}
