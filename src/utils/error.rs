use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP request returned status {status}")]
    HttpStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Unknown zodiac sign: {label}")]
    SignNotFound { label: String },

    #[error("Invalid zodiac sign ordinal: {ordinal}")]
    InvalidSign { ordinal: u8 },

    #[error("Combination id {value} is outside 1..=144")]
    InvalidCombination { value: u16 },

    #[error("Content extraction failed: {message}")]
    ExtractionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Content,
    UserInput,
    Configuration,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::HttpError(_) | BotError::HttpStatusError { .. } => ErrorCategory::Network,
            BotError::ExtractionError { .. } => ErrorCategory::Content,
            BotError::SignNotFound { .. }
            | BotError::InvalidSign { .. }
            | BotError::InvalidCombination { .. } => ErrorCategory::UserInput,
            BotError::IoError(_) => ErrorCategory::Transport,
            BotError::ConfigError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Content => ErrorSeverity::Medium,
            ErrorCategory::Transport => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::HttpError(e) if e.is_timeout() => {
                "The content site did not answer in time".to_string()
            }
            BotError::HttpError(_) | BotError::HttpStatusError { .. } => {
                "Could not reach the content site".to_string()
            }
            BotError::SignNotFound { label } => format!("'{}' is not a zodiac sign", label),
            BotError::InvalidSign { .. } | BotError::InvalidCombination { .. } => {
                "Invalid sign combination".to_string()
            }
            BotError::ExtractionError { .. } => "The page did not contain the expected content".to_string(),
            BotError::IoError(_) => "The chat transport stopped unexpectedly".to_string(),
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity or raise --timeout-seconds",
            ErrorCategory::Content => "The site layout may have changed; check [extract].container_class",
            ErrorCategory::UserInput => "Run `zodiac-bot signs` to list valid signs",
            ErrorCategory::Transport => "Restart the bot; check that stdin/stdout are still open",
            ErrorCategory::Configuration => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
