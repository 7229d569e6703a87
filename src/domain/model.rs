use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the three academic specializations being ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "ai")]
    ArtificialIntelligence,
    #[serde(rename = "si")]
    InformationSystems,
    #[serde(rename = "jaringan")]
    NetworkComputing,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::ArtificialIntelligence,
        Field::InformationSystems,
        Field::NetworkComputing,
    ];

    /// Canonical display name. The final tie-break compares these strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::ArtificialIntelligence => "Artificial Intelligence",
            Field::InformationSystems => "Sistem Informasi",
            Field::NetworkComputing => "Jaringan Komputer",
        }
    }

    /// Key used in config files and validation messages.
    pub fn config_key(&self) -> &'static str {
        match self {
            Field::ArtificialIntelligence => "ai",
            Field::InformationSystems => "si",
            Field::NetworkComputing => "jaringan",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::ArtificialIntelligence => 0,
            Field::InformationSystems => 1,
            Field::NetworkComputing => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Field {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| {
                needle == field.config_key()
                    || needle == field.display_name().to_lowercase()
                    || needle == field.display_name().to_lowercase().replace(' ', "_")
            })
            .ok_or_else(|| AdvisorError::InvalidInputValue {
                field: "field".to_string(),
                value: s.to_string(),
                reason: "Expected one of: ai, si, jaringan".to_string(),
            })
    }
}

/// Raw student ratings for one field: interest and career fit on 0-10, grade on 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub interest: u8,
    pub grade: u8,
    pub career_fit: u8,
}

impl RawInputs {
    pub fn new(interest: u8, grade: u8, career_fit: u8) -> Self {
        Self {
            interest,
            grade,
            career_fit,
        }
    }
}

/// Complete inputs for one evaluation, exactly one entry per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInputs {
    entries: [RawInputs; 3],
}

impl FieldInputs {
    pub fn new(ai: RawInputs, si: RawInputs, jaringan: RawInputs) -> Self {
        Self {
            entries: [ai, si, jaringan],
        }
    }

    pub fn uniform(inputs: RawInputs) -> Self {
        Self {
            entries: [inputs; 3],
        }
    }

    pub fn get(&self, field: Field) -> &RawInputs {
        &self.entries[field.index()]
    }

    pub fn set(&mut self, field: Field, inputs: RawInputs) {
        self.entries[field.index()] = inputs;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &RawInputs)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl TryFrom<HashMap<Field, RawInputs>> for FieldInputs {
    type Error = AdvisorError;

    fn try_from(mut map: HashMap<Field, RawInputs>) -> Result<Self> {
        let mut take = |field: Field| {
            map.remove(&field).ok_or_else(|| AdvisorError::MissingInput {
                field: field.display_name().to_string(),
            })
        };
        Ok(Self::new(
            take(Field::ArtificialIntelligence)?,
            take(Field::InformationSystems)?,
            take(Field::NetworkComputing)?,
        ))
    }
}

/// AHP weights per criterion. Non-negative, summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeights {
    pub interest: f64,
    pub grade: f64,
    pub career: f64,
}

impl CriterionWeights {
    pub fn sum(&self) -> f64 {
        self.interest + self.grade + self.career
    }
}

/// Fuzzy membership values of one field's inputs, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInputs {
    pub interest: f64,
    pub grade: f64,
    pub career_fit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredField {
    pub field: Field,
    pub inputs: RawInputs,
    pub normalized: NormalizedInputs,
    pub score: f64,
}

/// Elective courses offered as the minor recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    GraphicsComputing,
    Robotics,
    DecisionSupportSystems,
    Cryptography,
    NetworkSecurity,
    DistributedSystems,
}

impl Course {
    pub fn display_name(&self) -> &'static str {
        match self {
            Course::GraphicsComputing => "Grafika Komputer",
            Course::Robotics => "Robotika",
            Course::DecisionSupportSystems => "Decision Support System",
            Course::Cryptography => "Kriptografi",
            Course::NetworkSecurity => "Sistem Keamanan Jaringan",
            Course::DistributedSystems => "Sistem Terdistribusi",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Fields in ranked order, strongest first.
    pub ranking: Vec<ScoredField>,
    pub major: Field,
    pub minor: Field,
    pub minor_course: Course,
    /// Every tie-break key was equal, so the order came from the display names alone.
    pub all_tied: bool,
}
