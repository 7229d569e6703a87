use crate::core::export::DEFAULT_EXPORT_FILENAME;
use crate::domain::model::{FieldInputs, RawInputs};
use crate::domain::ports::InputSource;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub student: Option<StudentConfig>,
    pub fields: FieldsConfig,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsConfig {
    pub ai: RawInputs,
    pub si: RawInputs,
    pub jaringan: RawInputs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub enabled: bool,
    pub output_path: Option<String>,
    pub filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn inputs(&self) -> FieldInputs {
        FieldInputs::new(self.fields.ai, self.fields.si, self.fields.jaringan)
    }

    /// 是否輸出 CSV
    pub fn export_enabled(&self) -> bool {
        self.export.as_ref().map(|e| e.enabled).unwrap_or(false)
    }

    pub fn output_path(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.output_path.as_deref())
            .unwrap_or("./output")
    }

    pub fn filename(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.filename.as_deref())
            .unwrap_or(DEFAULT_EXPORT_FILENAME)
    }
}

impl InputSource for TomlConfig {
    fn field_inputs(&self) -> Result<FieldInputs> {
        Ok(self.inputs())
    }

    fn student_name(&self) -> Option<&str> {
        self.student.as_ref().map(|s| s.name.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.inputs().validate()?;

        if let Some(student) = &self.student {
            validation::validate_non_empty_string("student.name", &student.name)?;
        }

        if self.export_enabled() {
            validation::validate_path("export.output_path", self.output_path())?;
            validation::validate_non_empty_string("export.filename", self.filename())?;
            if self.output_path().contains("${") {
                return Err(AdvisorError::ConfigError {
                    message: format!(
                        "export.output_path references an unset environment variable: {}",
                        self.output_path()
                    ),
                });
            }
        }

        Ok(())
    }
}
