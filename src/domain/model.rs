use crate::utils::error::{BotError, Result};
use std::fmt;

/// One of the twelve zodiac signs. Instances only exist inside the static
/// registry table, so a `&'static Sign` is always a registered sign.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Sign {
    label: &'static str,
    external_id: &'static str,
    ordinal: u8,
    description: &'static str,
}

impl Sign {
    pub(crate) const fn new(
        label: &'static str,
        external_id: &'static str,
        ordinal: u8,
        description: &'static str,
    ) -> Self {
        Self {
            label,
            external_id,
            ordinal,
            description,
        }
    }

    /// Display label, symbol plus name, e.g. "♈ Овен".
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Lowercase identifier used in content-site URLs.
    pub fn external_id(&self) -> &'static str {
        self.external_id
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Period {
    Today,
    Week,
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoroscopeQuery {
    pub sign: &'static Sign,
    pub period: Period,
}

impl HoroscopeQuery {
    pub fn new(sign: &'static Sign, period: Period) -> Self {
        Self { sign, period }
    }
}

/// Identifier of a compatibility page, encoding an ordered (male, female)
/// pair of signs. Always within 1..=144.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationId(u8);

impl CombinationId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 144;

    pub fn new(value: u16) -> Result<Self> {
        if (Self::MIN as u16..=Self::MAX as u16).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(BotError::InvalidCombination { value })
        }
    }

    /// Ordinals of registered signs are always 1..=12, which keeps the
    /// result inside 1..=144.
    pub(crate) fn from_ordinals(male: u8, female: u8) -> Self {
        Self(12 * (male - 1) + female)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The (male, female) ordinals this id encodes.
    pub fn ordinals(self) -> (u8, u8) {
        let zero_based = self.0 - 1;
        (zero_based / 12 + 1, zero_based % 12 + 1)
    }
}

impl fmt::Display for CombinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw section pulled out of a compatibility page before defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSection {
    pub heading: Option<String>,
    pub paragraph: Option<String>,
}

/// A compatibility section with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilitySection {
    pub title: String,
    pub body: String,
}

pub type SessionId = String;

/// Reply keyboard offered alongside a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    /// Hide the keyboard after one press.
    pub one_time: bool,
    pub resize: bool,
}

impl Keyboard {
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyMarkup {
    /// Leave whatever keyboard the client currently shows.
    Keep,
    Remove,
    Keyboard(Keyboard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub session_id: SessionId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub text: String,
    pub markup: ReplyMarkup,
}

impl Outbound {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: ReplyMarkup::Keep,
        }
    }
}
