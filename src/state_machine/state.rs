//! Conversation state types

use crate::domain::model::Sign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvState {
    /// No conversation yet; only a start command is accepted.
    #[default]
    Idle,
    SelectSign,
    SelectOption,
    SelectCompatibilityMale,
    SelectCompatibilityFemale,
    /// Terminal. The runtime discards the session.
    Cancelled,
}

impl ConvState {
    pub fn is_active(&self) -> bool {
        !matches!(self, ConvState::Idle | ConvState::Cancelled)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "idle",
            ConvState::SelectSign => "select_sign",
            ConvState::SelectOption => "select_option",
            ConvState::SelectCompatibilityMale => "select_compatibility_male",
            ConvState::SelectCompatibilityFemale => "select_compatibility_female",
            ConvState::Cancelled => "cancelled",
        }
    }
}

/// Per-conversation record. Replaced wholesale by each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub state: ConvState,
    pub selected_sign: Option<&'static Sign>,
    pub selected_male_sign: Option<&'static Sign>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_state(state: ConvState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn with_state(self, state: ConvState) -> Self {
        Self { state, ..self }
    }
}
