use crate::core::export::DEFAULT_EXPORT_FILENAME;
use crate::domain::model::{FieldInputs, RawInputs};
use crate::domain::ports::{InputSource, Storage};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "major-finder")]
#[command(about = "Recommends a major and minor from interest, grades and career fit")]
pub struct CliConfig {
    #[arg(long, default_value = "5", help = "Interest in Artificial Intelligence (0-10)")]
    pub ai_interest: u8,

    #[arg(long, default_value = "80", help = "Artificial Intelligence course grade (0-100)")]
    pub ai_grade: u8,

    #[arg(long, default_value = "5", help = "Career fit of Artificial Intelligence (0-10)")]
    pub ai_career: u8,

    #[arg(long, default_value = "5", help = "Interest in Sistem Informasi (0-10)")]
    pub si_interest: u8,

    #[arg(long, default_value = "80", help = "Sistem Informasi course grade (0-100)")]
    pub si_grade: u8,

    #[arg(long, default_value = "5", help = "Career fit of Sistem Informasi (0-10)")]
    pub si_career: u8,

    #[arg(long, default_value = "5", help = "Interest in Jaringan Komputer (0-10)")]
    pub jaringan_interest: u8,

    #[arg(long, default_value = "80", help = "Jaringan Komputer course grade (0-100)")]
    pub jaringan_grade: u8,

    #[arg(long, default_value = "5", help = "Career fit of Jaringan Komputer (0-10)")]
    pub jaringan_career: u8,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Write the ranked scores as CSV")]
    pub export: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_EXPORT_FILENAME)]
    pub filename: String,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn inputs(&self) -> FieldInputs {
        FieldInputs::new(
            RawInputs::new(self.ai_interest, self.ai_grade, self.ai_career),
            RawInputs::new(self.si_interest, self.si_grade, self.si_career),
            RawInputs::new(
                self.jaringan_interest,
                self.jaringan_grade,
                self.jaringan_career,
            ),
        )
    }
}

impl InputSource for CliConfig {
    fn field_inputs(&self) -> Result<FieldInputs> {
        Ok(self.inputs())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.inputs().validate()?;
        if self.export {
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_non_empty_string("filename", &self.filename)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}
