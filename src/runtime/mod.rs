//! Runtime for executing conversations
//!
//! Holds one [`Session`] per chat, runs the pure transition and executes the
//! resulting effects against a [`ContentSource`].

#[cfg(test)]
pub mod testing;

use crate::domain::model::{Outbound, SessionId};
use crate::domain::ports::ContentSource;
use crate::state_machine::{transition, Effect, Event, Session};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct ConversationRuntime<C: ContentSource> {
    content: C,
    // per-session lock serializes one chat; distinct chats run independently
    sessions: Mutex<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl<C: ContentSource> ConversationRuntime<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    async fn slot(&self, session_id: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session = session_id, "Session created");
                Arc::new(Mutex::new(Session::new()))
            })
            .clone()
    }

    /// Remove the session only if the map still holds this exact slot; a
    /// newer session created by a concurrent /start must survive.
    async fn discard(&self, session_id: &str, slot: &Arc<Mutex<Session>>) {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .get(session_id)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
        {
            sessions.remove(session_id);
            tracing::debug!(session = session_id, "Session discarded");
        }
    }

    /// Handle one inbound event and return the messages to send, in order.
    pub async fn handle(&self, session_id: &str, event: Event) -> Vec<Outbound> {
        let slot = self.slot(session_id).await;
        self.apply(session_id, &slot, event).await
    }

    async fn apply(
        &self,
        session_id: &str,
        slot: &Arc<Mutex<Session>>,
        event: Event,
    ) -> Vec<Outbound> {
        let mut session = slot.lock().await;
        let before = session.state;

        let result = match transition(&session, event) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(session = session_id, state = before.name(), "Event ignored: {}", e);
                if !session.state.is_active() {
                    self.discard(session_id, slot).await;
                }
                return Vec::new();
            }
        };

        *session = result.session;
        tracing::debug!(
            session = session_id,
            from = before.name(),
            to = session.state.name(),
            "Transition"
        );

        let mut outbound = Vec::with_capacity(result.effects.len());
        let mut ended = false;
        for effect in result.effects {
            match effect {
                Effect::Reply { text, markup } => outbound.push(Outbound { text, markup }),
                Effect::FetchHoroscope(query) => {
                    outbound.push(Outbound::text(self.content.horoscope(&query).await));
                }
                Effect::FetchCompatibility(id) => {
                    outbound.push(Outbound::text(self.content.compatibility(id).await));
                }
                Effect::EndSession => ended = true,
            }
        }

        if ended {
            self.discard(session_id, slot).await;
        }

        outbound
    }

    /// Snapshot of a live session.
    pub async fn session(&self, session_id: &str) -> Option<Session> {
        let slot = self.sessions.lock().await.get(session_id).cloned()?;
        let session = *slot.lock().await;
        Some(session)
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
