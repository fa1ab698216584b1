pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod runtime;
pub mod state_machine;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{console::ConsoleTransport, html::ScraperExtractor};
pub use config::BotConfig;
pub use core::{bot::Bot, fetcher::HttpContentFetcher};
pub use runtime::ConversationRuntime;
pub use utils::error::{BotError, Result};
