use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url_template, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOROSCOPE_URL: &str = "https://horo.mail.ru/prediction/{sign}/{period}/";
pub const DEFAULT_COMPATIBILITY_URL: &str = "https://horo.mail.ru/compatibility/zodiac/{id}/";
pub const DEFAULT_CONTAINER_CLASS: &str = "b6a5d4949c e45a4c1552";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// `{sign}` and `{period}` are substituted.
    pub horoscope_url: String,
    /// `{id}` is substituted with the combination id.
    pub compatibility_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            horoscope_url: DEFAULT_HOROSCOPE_URL.to_string(),
            compatibility_url: DEFAULT_COMPATIBILITY_URL.to_string(),
            timeout_seconds: 10,
            user_agent: concat!("zodiac-bot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub container_class: String,
    pub heading_tag: String,
    pub paragraph_tag: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            heading_tag: "h2".to_string(),
            paragraph_tag: "p".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
    pub verbose: bool,
}

impl BotConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HORO_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BotError::ConfigError {
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
        validate_url_template(
            "source.horoscope_url",
            &self.source.horoscope_url,
            &["{sign}", "{period}"],
        )?;
        validate_url_template(
            "source.compatibility_url",
            &self.source.compatibility_url,
            &["{id}"],
        )?;
        validate_range("source.timeout_seconds", self.source.timeout_seconds, 1, 120)?;
        validate_non_empty_string("source.user_agent", &self.source.user_agent)?;
        validate_non_empty_string("extract.container_class", &self.extract.container_class)?;
        validate_non_empty_string("extract.heading_tag", &self.extract.heading_tag)?;
        validate_non_empty_string("extract.paragraph_tag", &self.extract.paragraph_tag)?;
        Ok(())
    }
}

impl ConfigProvider for BotConfig {
    fn horoscope_url(&self) -> &str {
        &self.source.horoscope_url
    }

    fn compatibility_url(&self) -> &str {
        &self.source.compatibility_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.source.user_agent
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
