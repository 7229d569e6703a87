pub mod advisor;
pub mod courses;
pub mod engine;
pub mod export;
pub mod weights;

pub use crate::domain::model::{
    Course, CriterionWeights, Field, FieldInputs, RawInputs, Recommendation, ScoredField,
};
pub use crate::domain::ports::{InputSource, Storage};
pub use crate::utils::error::Result;
