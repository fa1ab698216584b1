use clap::Parser;
use zodiac_bot::config::Command;
use zodiac_bot::core::{combination, registry};
use zodiac_bot::domain::model::HoroscopeQuery;
use zodiac_bot::domain::ports::ContentSource;
use zodiac_bot::utils::error::ErrorSeverity;
use zodiac_bot::utils::{logger, validation::Validate};
use zodiac_bot::{
    Bot, BotConfig, BotError, CliConfig, ConsoleTransport, HttpContentFetcher, ScraperExtractor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_bot_config() {
        Ok(config) => config,
        Err(e) => {
            // 日誌尚未初始化，直接輸出
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Bot config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command(), &config).await {
        tracing::error!(
            "❌ zodiac-bot failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 4,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn build_fetcher(config: &BotConfig) -> Result<HttpContentFetcher<ScraperExtractor>, BotError> {
    let extractor = ScraperExtractor::from_config(&config.extract)?;
    HttpContentFetcher::new(config, extractor)
}

async fn run(command: Command, config: &BotConfig) -> Result<(), BotError> {
    match command {
        Command::Chat { session } => {
            let fetcher = build_fetcher(config)?;
            let transport = ConsoleTransport::stdio(session);
            let mut bot = Bot::new(transport, fetcher);
            let stats = bot.run().await?;
            tracing::info!("✅ Handled {} messages, sent {} replies", stats.received, stats.sent);
        }
        Command::Horoscope { sign, period } => {
            let sign = registry::resolve(&sign)?;
            let fetcher = build_fetcher(config)?;
            println!("{}", fetcher.horoscope(&HoroscopeQuery::new(sign, period)).await);
        }
        Command::Compatibility { male, female } => {
            let male = registry::resolve(&male)?;
            let female = registry::resolve(&female)?;
            let id = combination::combine(male, female);
            let fetcher = build_fetcher(config)?;
            println!("{} + {} (#{})", male, female, id);
            println!("{}", fetcher.compatibility(id).await);
        }
        Command::Signs => {
            for sign in registry::all() {
                println!("{:>2}  {:<12} {}", sign.ordinal(), sign.external_id(), sign.label());
            }
        }
    }
    Ok(())
}
