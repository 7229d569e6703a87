pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage, OutputFormat};

pub use config::toml_config::TomlConfig;
pub use crate::core::advisor::{Advisor, AdvisorOutcome};
pub use crate::core::engine::{recommend, RecommendationEngine};
pub use crate::core::weights::derive_weights;
pub use crate::domain::model::{
    Course, CriterionWeights, Field, FieldInputs, RawInputs, Recommendation, ScoredField,
};
pub use crate::utils::error::{AdvisorError, Result};
