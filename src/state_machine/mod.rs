//! Conversation state machine
//!
//! Pure transitions from (session, event) to (session, effects); the
//! runtime executes the effects.

mod effect;
pub mod event;
pub mod messages;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{ConvState, Session};
pub use transition::{transition, TransitionError, TransitionResult};
