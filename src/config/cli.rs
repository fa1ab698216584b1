use crate::config::toml_config::BotConfig;
use crate::domain::model::Period;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "zodiac-bot")]
#[command(about = "Zodiac horoscope and compatibility chat bot")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Override [source].timeout_seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the conversation over stdin/stdout
    Chat {
        #[arg(long, default_value = "console")]
        session: String,
    },
    /// Fetch one horoscope and print it
    Horoscope {
        /// Sign label or external id (e.g. "aries")
        #[arg(long)]
        sign: String,
        #[arg(long, value_enum, default_value_t = Period::Today)]
        period: Period,
    },
    /// Fetch one compatibility reading and print it
    Compatibility {
        #[arg(long)]
        male: String,
        #[arg(long)]
        female: String,
    },
    /// List the known signs
    Signs,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat {
            session: "console".to_string(),
        })
    }

    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn load_bot_config(&self) -> Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::from_file(path)?,
            None => BotConfig::default(),
        };

        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = timeout;
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;

        Ok(config)
    }
}
