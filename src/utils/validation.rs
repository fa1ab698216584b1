use crate::utils::error::{BotError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// A URL template must be a valid http(s) URL once its placeholders are
/// filled in, and must contain every placeholder the fetcher substitutes.
pub fn validate_url_template(field_name: &str, template: &str, placeholders: &[&str]) -> Result<()> {
    for placeholder in placeholders {
        if !template.contains(placeholder) {
            return Err(BotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: template.to_string(),
                reason: format!("Template is missing placeholder {}", placeholder),
            });
        }
    }

    let sample = placeholders
        .iter()
        .fold(template.to_string(), |acc, p| acc.replace(p, "x"));
    validate_url(field_name, &sample).map_err(|_| BotError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: template.to_string(),
        reason: "Template does not form a valid http(s) URL".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.horoscope_url", "https://example.com").is_ok());
        assert!(validate_url("source.horoscope_url", "http://example.com").is_ok());
        assert!(validate_url("source.horoscope_url", "").is_err());
        assert!(validate_url("source.horoscope_url", "invalid-url").is_err());
        assert!(validate_url("source.horoscope_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_url_template() {
        assert!(validate_url_template(
            "source.horoscope_url",
            "https://horo.mail.ru/prediction/{sign}/{period}/",
            &["{sign}", "{period}"],
        )
        .is_ok());
        assert!(validate_url_template(
            "source.horoscope_url",
            "https://horo.mail.ru/prediction/{sign}/",
            &["{sign}", "{period}"],
        )
        .is_err());
        assert!(validate_url_template("source.compatibility_url", "{id}", &["{id}"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("source.timeout_seconds", 10u64, 1, 120).is_ok());
        assert!(validate_range("source.timeout_seconds", 0u64, 1, 120).is_err());
        assert!(validate_range("source.timeout_seconds", 121u64, 1, 120).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("extract.container_class", "b6a5d4949c").is_ok());
        assert!(validate_non_empty_string("extract.container_class", "   ").is_err());
    }
}
