use crate::domain::ports::{ContentSource, Transport};
use crate::runtime::ConversationRuntime;
use crate::state_machine::Event;
use crate::utils::error::Result;

/// Pumps messages from a transport through the conversation runtime.
pub struct Bot<T: Transport, C: ContentSource> {
    transport: T,
    runtime: ConversationRuntime<C>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotStats {
    pub received: usize,
    pub ignored: usize,
    pub sent: usize,
}

impl<T: Transport, C: ContentSource> Bot<T, C> {
    pub fn new(transport: T, content: C) -> Self {
        Self {
            transport,
            runtime: ConversationRuntime::new(content),
        }
    }

    pub fn runtime(&self) -> &ConversationRuntime<C> {
        &self.runtime
    }

    /// Runs until the transport closes. Transport failures end the loop.
    pub async fn run(&mut self) -> Result<BotStats> {
        let mut stats = BotStats::default();
        tracing::info!("Bot started, waiting for messages");

        while let Some(inbound) = self.transport.next_inbound().await? {
            stats.received += 1;

            let Some(event) = Event::parse(&inbound.text) else {
                tracing::debug!(session = %inbound.session_id, "Ignoring unknown command: {}", inbound.text);
                stats.ignored += 1;
                continue;
            };

            let replies = self.runtime.handle(&inbound.session_id, event).await;
            if replies.is_empty() {
                stats.ignored += 1;
            }
            for reply in &replies {
                self.transport.send(&inbound.session_id, reply).await?;
                stats.sent += 1;
            }
        }

        tracing::info!(
            received = stats.received,
            sent = stats.sent,
            ignored = stats.ignored,
            "Transport closed, bot stopped"
        );
        Ok(stats)
    }
}
