//! Inbound events that drive the conversation

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Cancel,
    Text(String),
}

impl Event {
    /// Classify a raw chat message. Unknown slash commands yield `None`
    /// and are ignored by the bot.
    pub fn parse(raw: &str) -> Option<Event> {
        let text = raw.trim();
        let Some(command) = text.strip_prefix('/') else {
            return Some(Event::Text(text.to_string()));
        };

        // "/start@zodiac_bot payload" -> "start"
        let name = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default();

        match name {
            "start" => Some(Event::Start),
            "cancel" => Some(Event::Cancel),
            _ => None,
        }
    }
}
