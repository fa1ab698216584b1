//! The fixed catalogue of zodiac signs.

use crate::domain::model::Sign;
use crate::utils::error::{BotError, Result};

static SIGNS: [Sign; 12] = [
    Sign::new(
        "♈ Овен",
        "aries",
        1,
        "♈ Управитель Марс дает знаку такие черты как резкость, яркость, живость, энергичность и стремительность.",
    ),
    Sign::new(
        "♉ Телец",
        "taurus",
        2,
        "♉ Управитель Венера дарует стабильность, уверенность и материальную гармонию.",
    ),
    Sign::new(
        "♊ Близнецы",
        "gemini",
        3,
        "♊ Управитель Меркурий отвечает за любознательность, общительность, умение налаживать контакты.",
    ),
    Sign::new(
        "♋ Рак",
        "cancer",
        4,
        "♋ Управитель Луна несет душевность, чувственность, внутреннее спокойствие и умение заботиться о других.",
    ),
    Sign::new(
        "♌ Лев",
        "leo",
        5,
        "♌ Управитель Солнце наделяет энергичностью, страстностью, умением быть в центре внимания, устойчивостью и творческим началом.",
    ),
    Sign::new(
        "♍ Дева",
        "virgo",
        6,
        "♍ Управитель Меркурий дарит внимательность, стремление к идеальности и порядку, аккуратность и перфекционизм.",
    ),
    Sign::new(
        "♎ Весы",
        "libra",
        7,
        "♎ Управитель Венера отвечает за плавность, мягкость, баланс, красоту и утонченность.",
    ),
    Sign::new(
        "♏ Скорпион",
        "scorpio",
        8,
        "♏ Управитель Плутон несет страсть, интуицию, загадочность, умение видеть суть событий.",
    ),
    Sign::new(
        "♐ Стрелец",
        "sagittarius",
        9,
        "♐ Управитель Юпитер дает человеку сообразительность, широту души, тягу к расширению границ, умение вести за собой.",
    ),
    Sign::new(
        "♑ Козерог",
        "capricorn",
        10,
        "♑ Управитель Сатурн привнесет в характер конкретность и дисциплину, умение видеть цель и идти к ней.",
    ),
    Sign::new(
        "♒ Водолей",
        "aquarius",
        11,
        "♒ Управитель Уран отвечает за революционность, новые прорывные идеи, предвосхищение будущего и внутреннюю свободу.",
    ),
    Sign::new(
        "♓ Рыбы",
        "pisces",
        12,
        "♓ Управитель Нептун подарит творческую жилку, вдохновение, умение копнуть глубоко и наличие своей философии.",
    ),
];

/// All signs in declaration order (Aries first).
pub fn all() -> &'static [Sign] {
    &SIGNS
}

pub fn labels() -> impl Iterator<Item = &'static str> {
    SIGNS.iter().map(Sign::label)
}

/// Exact match on the display label, as sent back by the reply keyboard.
pub fn lookup(label: &str) -> Result<&'static Sign> {
    SIGNS
        .iter()
        .find(|sign| sign.label() == label)
        .ok_or_else(|| BotError::SignNotFound {
            label: label.to_string(),
        })
}

pub fn by_ordinal(ordinal: u8) -> Result<&'static Sign> {
    // ordinals are 1-based and match table position
    ordinal
        .checked_sub(1)
        .and_then(|idx| SIGNS.get(idx as usize))
        .ok_or(BotError::InvalidSign { ordinal })
}

pub fn by_external_id(external_id: &str) -> Result<&'static Sign> {
    SIGNS
        .iter()
        .find(|sign| sign.external_id().eq_ignore_ascii_case(external_id))
        .ok_or_else(|| BotError::SignNotFound {
            label: external_id.to_string(),
        })
}

/// Accepts either a display label or an external id.
pub fn resolve(input: &str) -> Result<&'static Sign> {
    let input = input.trim();
    lookup(input).or_else(|_| by_external_id(input))
}
