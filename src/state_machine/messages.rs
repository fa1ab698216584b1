//! User-facing texts and reply keyboards.

use crate::core::registry;
use crate::domain::model::{Keyboard, Period, ReplyMarkup};

pub const GREETING: &str = "🌟 Привет! Выберите ваш знак зодиака:";
pub const SIGN_RETRY: &str = "⏳ Пожалуйста, подождите немного перед следующим сообщением.";
pub const MENU_PROMPT: &str = "Что вас интересует?";
pub const OPTION_RETRY: &str = "🚫 Пожалуйста, выберите опцию из списка.";
pub const SIGN_INFO_UNAVAILABLE: &str = "Информация о знаке недоступна.";
pub const MALE_PROMPT: &str = "Выберите знак мужчины:";
pub const PAIR_SIGN_RETRY: &str = "Пожалуйста, выберите знак из предложенного списка.";
pub const FAREWELL: &str = "👋 До свидания!";

pub const HOROSCOPE_TODAY: &str = "🔮 Гороскоп на сегодня";
pub const HOROSCOPE_WEEK: &str = "📅 Гороскоп на неделю";
pub const HOROSCOPE_MONTH: &str = "🌙 Гороскоп на месяц";
pub const CHANGE_SIGN: &str = "♻️ Сменить знак";
pub const SIGN_INFO: &str = "ℹ️ Информация о знаке";
pub const COMPATIBILITY: &str = "💑 Совместимость";

/// An entry of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Horoscope(Period),
    ChangeSign,
    SignInfo,
    Compatibility,
}

impl MenuAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            HOROSCOPE_TODAY => Some(MenuAction::Horoscope(Period::Today)),
            HOROSCOPE_WEEK => Some(MenuAction::Horoscope(Period::Week)),
            HOROSCOPE_MONTH => Some(MenuAction::Horoscope(Period::Month)),
            CHANGE_SIGN => Some(MenuAction::ChangeSign),
            SIGN_INFO => Some(MenuAction::SignInfo),
            COMPATIBILITY => Some(MenuAction::Compatibility),
            _ => None,
        }
    }
}

pub fn sign_chosen(label: &str) -> String {
    format!("Вы выбрали {}. {}", label, MENU_PROMPT)
}

pub fn male_chosen(label: &str) -> String {
    format!("Вы выбрали {}. Теперь выберите знак женщины:", label)
}

/// One sign per row, hidden after a press.
pub fn sign_keyboard() -> ReplyMarkup {
    ReplyMarkup::Keyboard(Keyboard {
        rows: registry::labels().map(|label| vec![label.to_string()]).collect(),
        one_time: true,
        resize: true,
    })
}

pub fn menu_keyboard() -> ReplyMarkup {
    let row = |labels: [&str; 3]| -> Vec<String> { labels.iter().map(|l| l.to_string()).collect() };
    ReplyMarkup::Keyboard(Keyboard {
        rows: vec![
            row([HOROSCOPE_TODAY, HOROSCOPE_WEEK, HOROSCOPE_MONTH]),
            row([CHANGE_SIGN, SIGN_INFO, COMPATIBILITY]),
        ],
        one_time: false,
        resize: true,
    })
}
