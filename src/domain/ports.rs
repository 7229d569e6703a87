use crate::domain::model::FieldInputs;
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

/// Anything that can supply one student's ratings for all three fields.
pub trait InputSource {
    fn field_inputs(&self) -> Result<FieldInputs>;

    /// Student name for log lines and the JSON report, when known.
    fn student_name(&self) -> Option<&str> {
        None
    }
}
