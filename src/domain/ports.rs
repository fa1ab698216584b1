use crate::domain::model::{CombinationId, HoroscopeQuery, Inbound, Outbound, RawSection, SessionId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of horoscope and compatibility text. Implementations absorb every
/// failure into a fixed fallback string, so neither call can fail.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn horoscope(&self, query: &HoroscopeQuery) -> String;
    async fn compatibility(&self, id: CombinationId) -> String;
}

/// Pulls text fragments out of a content page.
pub trait Extractor: Send + Sync {
    /// Trimmed text of the first paragraph inside the first content container.
    fn first_paragraph(&self, html: &str) -> Option<String>;

    /// Every content container in document order.
    fn sections(&self, html: &str) -> Vec<RawSection>;
}

pub trait ConfigProvider: Send + Sync {
    fn horoscope_url(&self) -> &str;
    fn compatibility_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Chat transport the bot is driven by.
pub trait Transport: Send {
    /// Next inbound message, or `None` once the transport is closed.
    fn next_inbound(&mut self) -> impl std::future::Future<Output = Result<Option<Inbound>>> + Send;
    fn send(
        &mut self,
        session_id: &SessionId,
        message: &Outbound,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
