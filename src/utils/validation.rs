use crate::domain::model::{Field, FieldInputs, RawInputs};
use crate::utils::error::{AdvisorError, Result};

pub const MAX_RATING: u8 = 10;
pub const MAX_GRADE: u8 = 100;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AdvisorError::InvalidInputValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AdvisorError::InvalidInputValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::InvalidInputValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AdvisorError::InvalidInputValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_raw_inputs(field: Field, inputs: &RawInputs) -> Result<()> {
    let code = field.config_key();
    validate_range(&format!("{}.interest", code), inputs.interest, 0, MAX_RATING)?;
    validate_range(&format!("{}.grade", code), inputs.grade, 0, MAX_GRADE)?;
    validate_range(&format!("{}.career_fit", code), inputs.career_fit, 0, MAX_RATING)?;
    Ok(())
}

impl Validate for FieldInputs {
    fn validate(&self) -> Result<()> {
        for (field, inputs) in self.iter() {
            validate_raw_inputs(field, inputs)?;
        }
        Ok(())
    }
}
