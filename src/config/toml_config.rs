use crate::adapters::history::DEFAULT_MAX_RECORDS_PER_CALLER;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_range, Validate, ValidationRules,
    DEFAULT_NAME_MAX_LENGTH, DEFAULT_VEHICLE_MAX_LENGTH,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: Option<HttpConfig>,
    pub auth: AuthConfig,
    pub validation: Option<ValidationConfig>,
    pub history: Option<HistoryConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub name_max_length: Option<usize>,
    pub vehicle_max_length: Option<usize>,
    pub vehicle_plate_pattern: Option<String>,
}

impl ValidationConfig {
    pub fn to_rules(&self) -> Result<ValidationRules> {
        let rules = ValidationRules {
            name_max_length: self.name_max_length.unwrap_or(DEFAULT_NAME_MAX_LENGTH),
            vehicle_max_length: self
                .vehicle_max_length
                .unwrap_or(DEFAULT_VEHICLE_MAX_LENGTH),
            vehicle_plate_pattern: None,
        };

        match self.vehicle_plate_pattern.as_deref() {
            Some(pattern) => rules.with_plate_pattern(pattern),
            None => Ok(rules),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_records_per_caller: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl ServerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JWT_SECRET})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::InternalError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let secret = self.auth.jwt_secret.trim();
        if secret.is_empty() {
            return Err(NumerologyError::MissingConfigError {
                field: "auth.jwt_secret".to_string(),
            });
        }
        if secret.starts_with("${") {
            return Err(NumerologyError::InvalidConfigValueError {
                field: "auth.jwt_secret".to_string(),
                value: secret.to_string(),
                reason: "Environment variable is not set".to_string(),
            });
        }

        validate_range("server.port", self.port(), 1, u16::MAX)?;

        if let Some(validation) = &self.validation {
            if let Some(max) = validation.name_max_length {
                validate_positive_number("validation.name_max_length", max, 1)?;
            }
            if let Some(max) = validation.vehicle_max_length {
                validate_positive_number("validation.vehicle_max_length", max, 1)?;
            }
        }

        // 編譯 plate pattern 以提早發現錯誤
        self.validation_rules()?;

        validate_positive_number(
            "history.max_records_per_caller",
            self.max_records_per_caller(),
            1,
        )?;

        Ok(())
    }

    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    pub fn cors_allowed_origins(&self) -> &[String] {
        self.server
            .as_ref()
            .and_then(|s| s.cors_allowed_origins.as_deref())
            .unwrap_or(&[])
    }

    pub fn jwt_secret(&self) -> &str {
        self.auth.jwt_secret.trim()
    }

    pub fn validation_rules(&self) -> Result<ValidationRules> {
        self.validation.clone().unwrap_or_default().to_rules()
    }

    pub fn history_enabled(&self) -> bool {
        self.history.as_ref().map(|h| h.enabled).unwrap_or(true)
    }

    pub fn max_records_per_caller(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|h| h.max_records_per_caller)
            .unwrap_or(DEFAULT_MAX_RECORDS_PER_CALLER)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// 只讀取 `[validation]` 區段，CLI 與伺服器共用同一份檔案格式
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationFile {
    pub validation: Option<ValidationConfig>,
}

impl ValidationFile {
    pub fn rules_from_file<P: AsRef<Path>>(path: P) -> Result<ValidationRules> {
        let content = std::fs::read_to_string(&path)?;
        let file: ValidationFile =
            toml::from_str(&content).map_err(|e| NumerologyError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        file.validation.unwrap_or_default().to_rules()
    }
}
