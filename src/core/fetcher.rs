use crate::domain::model::{CombinationId, CompatibilitySection, HoroscopeQuery, RawSection};
use crate::domain::ports::{ConfigProvider, ContentSource, Extractor};
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const HOROSCOPE_NOT_FOUND: &str = "Гороскоп не найден.";
pub const COMPATIBILITY_UNAVAILABLE: &str = "Не удалось получить данные с сайта.";
pub const COMPATIBILITY_NOT_FOUND: &str = "Информация о совместимости не найдена.";
pub const UNTITLED_SECTION: &str = "Без заголовка";
pub const SECTION_BODY_MISSING: &str = "Информация отсутствует.";

/// Content source that scrapes the horoscope site over HTTP.
pub struct HttpContentFetcher<E: Extractor> {
    client: Client,
    extractor: E,
    horoscope_url: String,
    compatibility_url: String,
}

impl<E: Extractor> HttpContentFetcher<E> {
    pub fn new<C: ConfigProvider>(config: &C, extractor: E) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            extractor,
            horoscope_url: config.horoscope_url().to_string(),
            compatibility_url: config.compatibility_url().to_string(),
        })
    }

    pub fn horoscope_url_for(&self, query: &HoroscopeQuery) -> String {
        self.horoscope_url
            .replace("{sign}", query.sign.external_id())
            .replace("{period}", query.period.as_str())
    }

    pub fn compatibility_url_for(&self, id: CombinationId) -> String {
        self.compatibility_url.replace("{id}", &id.to_string())
    }

    async fn get(&self, url: &str) -> Result<(reqwest::StatusCode, String)> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn try_horoscope(&self, query: &HoroscopeQuery) -> Result<String> {
        let url = self.horoscope_url_for(query);
        // the page is parsed whatever the status; a missing container is the failure signal
        let (_, body) = self.get(&url).await?;
        self.extractor
            .first_paragraph(&body)
            .ok_or_else(|| BotError::ExtractionError {
                message: format!("no horoscope paragraph at {}", url),
            })
    }

    async fn try_compatibility(&self, id: CombinationId) -> Result<Vec<CompatibilitySection>> {
        let url = self.compatibility_url_for(id);
        let (status, body) = self.get(&url).await?;
        if !status.is_success() {
            return Err(BotError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        Ok(self
            .extractor
            .sections(&body)
            .into_iter()
            .map(apply_section_defaults)
            .collect())
    }
}

fn apply_section_defaults(raw: RawSection) -> CompatibilitySection {
    CompatibilitySection {
        title: raw.heading.unwrap_or_else(|| UNTITLED_SECTION.to_string()),
        body: raw.paragraph.unwrap_or_else(|| SECTION_BODY_MISSING.to_string()),
    }
}

/// Bodies only, blank line between sections. Titles are not shown.
pub fn render_compatibility(sections: &[CompatibilitySection]) -> String {
    sections
        .iter()
        .map(|section| section.body.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl<E: Extractor> ContentSource for HttpContentFetcher<E> {
    async fn horoscope(&self, query: &HoroscopeQuery) -> String {
        match self.try_horoscope(query).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    sign = query.sign.external_id(),
                    period = %query.period,
                    "Horoscope unavailable: {}",
                    e
                );
                HOROSCOPE_NOT_FOUND.to_string()
            }
        }
    }

    async fn compatibility(&self, id: CombinationId) -> String {
        match self.try_compatibility(id).await {
            Ok(sections) if sections.is_empty() => {
                tracing::warn!(combination = id.get(), "No compatibility sections on page");
                COMPATIBILITY_NOT_FOUND.to_string()
            }
            Ok(sections) => {
                for section in &sections {
                    tracing::debug!(combination = id.get(), title = %section.title, "Compatibility section");
                }
                render_compatibility(&sections)
            }
            Err(e) => {
                tracing::warn!(combination = id.get(), "Compatibility unavailable: {}", e);
                COMPATIBILITY_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::html::ScraperExtractor;
    use crate::config::toml_config::{BotConfig, ExtractConfig};
    use crate::core::registry;
    use crate::domain::model::Period;

    fn fetcher() -> HttpContentFetcher<ScraperExtractor> {
        let extractor = ScraperExtractor::from_config(&ExtractConfig::default()).unwrap();
        HttpContentFetcher::new(&BotConfig::default(), extractor).unwrap()
    }

    #[test]
    fn test_horoscope_url_template() {
        let query = HoroscopeQuery::new(registry::lookup("♌ Лев").unwrap(), Period::Month);
        assert_eq!(
            fetcher().horoscope_url_for(&query),
            "https://horo.mail.ru/prediction/leo/month/"
        );
    }

    #[test]
    fn test_compatibility_url_template() {
        let id = CombinationId::new(119).unwrap();
        assert_eq!(
            fetcher().compatibility_url_for(id),
            "https://horo.mail.ru/compatibility/zodiac/119/"
        );
    }

    #[test]
    fn test_section_defaults() {
        let section = apply_section_defaults(RawSection::default());
        assert_eq!(section.title, UNTITLED_SECTION);
        assert_eq!(section.body, SECTION_BODY_MISSING);
    }

    #[test]
    fn test_render_skips_titles() {
        let sections = vec![
            CompatibilitySection {
                title: "Любовь".to_string(),
                body: "Первый".to_string(),
            },
            CompatibilitySection {
                title: UNTITLED_SECTION.to_string(),
                body: "Второй".to_string(),
            },
        ];
        assert_eq!(render_compatibility(&sections), "Первый\n\nВторой");
    }
}
